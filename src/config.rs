//! Configuration file handling for banner-forge.
//!
//! Loads configuration from `~/.config/banner-forge/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::banner::{EngineOptions, MissingGlyph, NormalizeOptions, DEFAULT_FONT_DIR};

/// Configuration file structure for banner-forge.
/// Loaded from ~/.config/banner-forge/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub fonts: FontsConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct FontsConfig {
    /// Directory holding shadow.txt, standard.txt and thinkertoy.txt
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct RenderConfig {
    /// Banner used when --banner is not given
    pub banner: Option<String>,
    #[serde(default)]
    pub expand_escapes: bool,
    #[serde(default)]
    pub split_on_spaces: bool,
    /// Character drawn in place of glyph rows missing from the bank
    pub placeholder: Option<char>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub strict_fonts: bool,
    #[serde(default)]
    pub validate_banks: bool,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Config::default());
        }
        Self::load_from_explicit(&path)
    }

    /// Load configuration from a path that must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Font directory, falling back to [`DEFAULT_FONT_DIR`].
    pub fn font_dir(&self) -> PathBuf {
        self.fonts
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_DIR))
    }

    /// Engine options described by this config.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            normalize: NormalizeOptions {
                expand_escapes: self.render.expand_escapes,
                split_on_spaces: self.render.split_on_spaces,
            },
            missing: self
                .render
                .placeholder
                .map_or(MissingGlyph::Skip, MissingGlyph::Placeholder),
            strict_fonts: self.engine.strict_fonts,
            validate_banks: self.engine.validate_banks,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("banner-forge").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/banner-forge/config.toml")
        })
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# banner-forge configuration

[fonts]
# Directory holding shadow.txt, standard.txt and thinkertoy.txt
# dir = "/usr/share/banner-forge/fonts"

[render]
# Banner: shadow, standard, thinkertoy
banner = "standard"
# Turn a typed backslash-n into a line break
expand_escapes = false
# Render every space-separated word as its own block
split_on_spaces = false
# Draw this character where a glyph row is missing from the bank
# placeholder = "?"

[engine]
# Fail on unknown banners instead of printing nothing
strict_fonts = false
# Reject font banks that do not cover all printable ASCII
validate_banks = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.font_dir(), PathBuf::from("fonts"));
        assert_eq!(config.engine_options(), EngineOptions::default());
    }

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[fonts]
dir = "/opt/fonts"

[render]
banner = "shadow"
expand_escapes = true
placeholder = "?"

[engine]
strict_fonts = true
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.font_dir(), PathBuf::from("/opt/fonts"));
        assert_eq!(config.render.banner.as_deref(), Some("shadow"));

        let options = config.engine_options();
        assert!(options.normalize.expand_escapes);
        assert!(!options.normalize.split_on_spaces);
        assert_eq!(options.missing, MissingGlyph::Placeholder('?'));
        assert!(options.strict_fonts);
        assert!(!options.validate_banks);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[engine]\nvalidate_banks = true\n").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.fonts.dir.is_none());
        assert!(config.render.banner.is_none());
        assert!(config.engine_options().validate_banks);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[render\nbanner = ").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_explicit(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.render.banner.as_deref(), Some("standard"));
        assert_eq!(config.engine_options(), EngineOptions::default());
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("banner-forge/config.toml"));
    }
}
