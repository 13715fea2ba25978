//! Error types for banner rendering.

use std::path::PathBuf;

use super::bank::FontSelector;

/// Errors that can occur while rendering a banner.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Input contains a character outside the ASCII range
    #[error("Invalid input text: non-ASCII character {ch:?} at position {position}")]
    NonAsciiInput { ch: char, position: usize },

    /// Caller supplied no text at all
    #[error("Input text is required")]
    EmptyInput,

    /// Selector is not a known font bank (strict mode only)
    #[error("Unknown banner '{0}'. Available banners: shadow, standard, thinkertoy")]
    UnknownFont(String),

    /// Font bank file could not be opened or read
    #[error("Font bank '{}' unavailable: {source}", path.display())]
    FontBankUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Font bank file exists but is not valid UTF-8 text
    #[error("Font bank '{}' is corrupt: {source}", path.display())]
    CorruptBank {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Font bank has fewer rows than full printable ASCII coverage needs
    #[error("Font bank '{selector}' is undersized: {rows} rows, expected at least {expected}")]
    UndersizedBank {
        selector: FontSelector,
        rows: usize,
        expected: usize,
    },
}

impl RenderError {
    /// Whether the error was caused by the caller's input (a 4xx, in HTTP terms).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RenderError::NonAsciiInput { .. } | RenderError::EmptyInput | RenderError::UnknownFont(_)
        )
    }

    /// Whether retrying the same call might succeed.
    ///
    /// Only storage failures are transient; the engine never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RenderError::FontBankUnavailable { .. })
    }
}
