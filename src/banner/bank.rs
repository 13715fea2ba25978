//! Font bank selection and loading.
//!
//! A font bank is a plain text file holding 9 rows per printable ASCII
//! character, starting at the space character (code 32). Row 0 of each block
//! is reserved; rows 1-8 are the glyph.

use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::error::RenderError;

/// Rows allocated to each character in a font bank.
pub const ROWS_PER_GLYPH: usize = 9;

/// First character code stored in a font bank (ASCII space).
pub const FIRST_CHAR: u32 = 32;

/// Number of printable ASCII characters (space through tilde).
pub const PRINTABLE_CHARS: usize = 95;

/// Minimum row count for a bank covering every printable ASCII character.
pub const FULL_BANK_ROWS: usize = PRINTABLE_CHARS * ROWS_PER_GLYPH;

/// The closed set of font banks a caller can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSelector {
    Shadow,
    #[default]
    Standard,
    Thinkertoy,
}

impl FontSelector {
    /// Every selectable font bank, in display order.
    pub const ALL: [FontSelector; 3] = [
        FontSelector::Shadow,
        FontSelector::Standard,
        FontSelector::Thinkertoy,
    ];

    /// Resolve a user-facing selector.
    ///
    /// Returns `None` for anything outside the closed set; callers treat that
    /// as "nothing to render" rather than an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "shadow" => Some(FontSelector::Shadow),
            "standard" => Some(FontSelector::Standard),
            "thinkertoy" => Some(FontSelector::Thinkertoy),
            _ => None,
        }
    }

    /// Get the user-facing name of the selector.
    pub fn name(&self) -> &'static str {
        match self {
            FontSelector::Shadow => "shadow",
            FontSelector::Standard => "standard",
            FontSelector::Thinkertoy => "thinkertoy",
        }
    }

    /// Resource file name for this bank.
    pub fn file_name(&self) -> &'static str {
        match self {
            FontSelector::Shadow => "shadow.txt",
            FontSelector::Standard => "standard.txt",
            FontSelector::Thinkertoy => "thinkertoy.txt",
        }
    }

    /// Full path of this bank's file inside `font_dir`.
    pub fn path_in(&self, font_dir: &Path) -> PathBuf {
        font_dir.join(self.file_name())
    }
}

impl fmt::Display for FontSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ordered rows of one font bank file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontBank {
    lines: Vec<String>,
}

impl FontBank {
    /// Build a bank from rows already in memory.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse bank content, splitting on newlines without keeping terminators.
    pub fn parse(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Read a bank from disk.
    ///
    /// Content that is not UTF-8 is reported as [`RenderError::CorruptBank`];
    /// any other failure to open or read the file is
    /// [`RenderError::FontBankUnavailable`].
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let unavailable = |source: std::io::Error| RenderError::FontBankUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let read_failed = |source: std::io::Error| {
            if source.kind() == std::io::ErrorKind::InvalidData {
                RenderError::CorruptBank {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                unavailable(source)
            }
        };

        let file = std::fs::File::open(path).map_err(unavailable)?;
        let lines = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_failed)?;

        // Match a line scanner: strip a CR left over from CRLF files
        let lines = lines
            .into_iter()
            .map(|mut line| {
                if line.ends_with('\r') {
                    line.pop();
                }
                line
            })
            .collect();

        log::debug!("Loaded font bank {:?}", path);
        Ok(Self { lines })
    }

    /// Reject banks too small to cover every printable ASCII character.
    pub fn validate(&self, selector: FontSelector) -> Result<(), RenderError> {
        if self.lines.len() < FULL_BANK_ROWS {
            return Err(RenderError::UndersizedBank {
                selector,
                rows: self.lines.len(),
                expected: FULL_BANK_ROWS,
            });
        }
        Ok(())
    }

    /// Get the row at an absolute index, if present.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All rows, in file order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_selector_parse_known() {
        assert_eq!(FontSelector::parse("shadow"), Some(FontSelector::Shadow));
        assert_eq!(FontSelector::parse("standard"), Some(FontSelector::Standard));
        assert_eq!(
            FontSelector::parse("thinkertoy"),
            Some(FontSelector::Thinkertoy)
        );
    }

    #[test]
    fn test_selector_parse_unknown() {
        assert_eq!(FontSelector::parse(""), None);
        assert_eq!(FontSelector::parse("Standard"), None);
        assert_eq!(FontSelector::parse("standard.txt"), None);
        assert_eq!(FontSelector::parse("nonexistent-font"), None);
    }

    #[test]
    fn test_selector_file_names() {
        assert_eq!(FontSelector::Shadow.file_name(), "shadow.txt");
        assert_eq!(FontSelector::Standard.file_name(), "standard.txt");
        assert_eq!(FontSelector::Thinkertoy.file_name(), "thinkertoy.txt");
        assert_eq!(
            FontSelector::Standard.path_in(Path::new("fonts")),
            PathBuf::from("fonts/standard.txt")
        );
    }

    #[test]
    fn test_selector_name_round_trips_through_parse() {
        for selector in FontSelector::ALL {
            assert_eq!(FontSelector::parse(selector.name()), Some(selector));
            assert_eq!(selector.to_string(), selector.name());
        }
    }

    #[test]
    fn test_parse_strips_terminators() {
        let bank = FontBank::parse("\nrow one\r\nrow two\n");
        assert_eq!(bank.lines(), &["", "row one", "row two"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\n _ \r\n| |\n").unwrap();

        let bank = FontBank::load(file.path()).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.line(0), Some(""));
        assert_eq!(bank.line(1), Some(" _ "));
        assert_eq!(bank.line(2), Some("| |"));
        assert_eq!(bank.line(3), None);
    }

    #[test]
    fn test_load_invalid_utf8_is_corrupt() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b" _ \n\xff\xfe\n").unwrap();

        let err = FontBank::load(file.path()).unwrap_err();
        assert!(matches!(err, RenderError::CorruptBank { .. }));
        assert!(!err.is_retryable());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("standard.txt");

        let err = FontBank::load(&path).unwrap_err();
        match err {
            RenderError::FontBankUnavailable { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_undersized() {
        let bank = FontBank::from_lines(vec![""; 18]);
        let err = bank.validate(FontSelector::Shadow).unwrap_err();
        assert!(matches!(
            err,
            RenderError::UndersizedBank {
                selector: FontSelector::Shadow,
                rows: 18,
                expected: FULL_BANK_ROWS,
            }
        ));
    }

    #[test]
    fn test_validate_accepts_full_bank() {
        let bank = FontBank::from_lines(vec![""; FULL_BANK_ROWS]);
        assert!(bank.validate(FontSelector::Standard).is_ok());
    }
}
