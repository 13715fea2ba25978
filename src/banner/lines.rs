//! Splitting raw input text into logical lines.

use super::error::RenderError;

/// Options controlling how raw text is split into logical lines.
///
/// With everything off, only literal newline characters split lines and a
/// textual backslash-n is rendered as two glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    /// Rewrite the two-character sequence `\n` into a line break before splitting.
    pub expand_escapes: bool,
    /// Treat ASCII spaces as line separators, giving each word its own block.
    pub split_on_spaces: bool,
}

/// Split `text` into logical lines.
///
/// Empty text has no lines. Otherwise consecutive, leading, or trailing
/// separators produce empty lines, which render as a single blank row each.
pub fn normalize(text: &str, options: NormalizeOptions) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = if options.expand_escapes {
        text.replace("\\n", "\n")
    } else {
        text.to_string()
    };

    let lines: Vec<String> = if options.split_on_spaces {
        text.split(['\n', ' ']).map(str::to_string).collect()
    } else {
        text.split('\n').map(str::to_string).collect()
    };
    log::debug!("Normalized input into {} logical line(s)", lines.len());
    lines
}

/// Reject text containing any character above code point 127.
///
/// `position` in the error is the character (not byte) index of the first
/// offending character.
pub fn validate_ascii(text: &str) -> Result<(), RenderError> {
    match text.chars().enumerate().find(|(_, ch)| !ch.is_ascii()) {
        Some((position, ch)) => Err(RenderError::NonAsciiInput { ch, position }),
        None => Ok(()),
    }
}
