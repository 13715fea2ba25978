//! Row-major banner composition.

use super::bank::FontBank;
use super::glyph::{glyph_row, GLYPH_HEIGHT};

/// What to emit for a glyph sub-row that falls outside the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingGlyph {
    /// Emit nothing; later columns shift left
    #[default]
    Skip,
    /// Emit a run of this character as wide as the bank's space glyph
    Placeholder(char),
}

impl MissingGlyph {
    /// Text to emit for a missing sub-row `m` of `bank`.
    fn fill(&self, bank: &FontBank, m: usize) -> Option<String> {
        match self {
            MissingGlyph::Skip => None,
            MissingGlyph::Placeholder(c) => {
                let width = glyph_row(bank, ' ', m).map_or(1, str::len).max(1);
                Some(c.to_string().repeat(width))
            }
        }
    }
}

/// Compose logical lines into banner art.
///
/// A non-empty line becomes 8 rows, each the left-to-right concatenation of
/// one glyph sub-row per character. An empty line becomes a single `"\n"`.
/// Every row, including rows where no lookup succeeded, ends with one newline.
pub fn compose<S: AsRef<str>>(lines: &[S], bank: &FontBank, missing: MissingGlyph) -> String {
    let mut art = String::new();

    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            art.push('\n');
            continue;
        }

        for m in 1..=GLYPH_HEIGHT {
            for ch in line.chars() {
                match glyph_row(bank, ch, m) {
                    Some(row) => art.push_str(row),
                    None => {
                        if let Some(fill) = missing.fill(bank, m) {
                            art.push_str(&fill);
                        }
                    }
                }
            }
            art.push('\n');
        }
    }

    art
}
