//! Rendering engine facade.
//!
//! Each call runs the same pipeline: resolve the selector, load the bank
//! (through the cache), split the text into logical lines, check it is
//! ASCII, then compose. Nothing is retried and no state survives a call
//! apart from cached banks.

use std::path::PathBuf;

use super::bank::FontSelector;
use super::cache::FontCache;
use super::compose::{compose, MissingGlyph};
use super::error::RenderError;
use super::lines::{normalize, validate_ascii, NormalizeOptions};

/// Default directory holding the font bank files.
pub const DEFAULT_FONT_DIR: &str = "fonts";

/// Behavior switches for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// How raw text is split into logical lines
    pub normalize: NormalizeOptions,
    /// What to emit when a glyph sub-row is outside the bank
    pub missing: MissingGlyph,
    /// Fail with `UnknownFont` instead of returning empty output
    pub strict_fonts: bool,
    /// Reject banks that do not cover every printable ASCII character
    pub validate_banks: bool,
}

/// Banner rendering engine.
///
/// Holds the font cache; everything else is per call. Share it across
/// threads by reference.
#[derive(Debug)]
pub struct Engine {
    cache: FontCache,
    options: EngineOptions,
}

impl Engine {
    /// Create an engine reading banks from `font_dir`.
    pub fn new(font_dir: impl Into<PathBuf>, options: EngineOptions) -> Self {
        Self {
            cache: FontCache::new(font_dir.into(), options.validate_banks),
            options,
        }
    }

    /// Create an engine rooted at [`DEFAULT_FONT_DIR`] with default options.
    pub fn with_default_dir() -> Self {
        Self::new(DEFAULT_FONT_DIR, EngineOptions::default())
    }

    /// Render `text` with the font bank named by `selector`.
    ///
    /// An unknown selector yields `Ok("")` unless strict fonts are enabled.
    /// Empty text yields `Ok("")`.
    pub fn render(&self, text: &str, selector: &str) -> Result<String, RenderError> {
        let Some(font) = FontSelector::parse(selector) else {
            if self.options.strict_fonts {
                log::warn!("Unknown banner requested: {:?}", selector);
                return Err(RenderError::UnknownFont(selector.to_string()));
            }
            log::debug!("Unknown banner {:?}, rendering nothing", selector);
            return Ok(String::new());
        };

        let bank = self.cache.get(font)?;
        let lines = normalize(text, self.options.normalize);
        validate_ascii(text)?;

        let art = compose(&lines, &bank, self.options.missing);
        log::debug!(
            "Rendered {} logical line(s) with {} into {} bytes",
            lines.len(),
            font,
            art.len()
        );
        Ok(art)
    }

    /// Render on behalf of a form-style caller that requires some input.
    ///
    /// Same as [`Engine::render`], except empty text is rejected with
    /// [`RenderError::EmptyInput`] before anything else is checked.
    pub fn render_request(&self, text: &str, selector: &str) -> Result<String, RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyInput);
        }
        self.render(text, selector)
    }

    /// Get the engine's options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Get the engine's font cache.
    pub fn cache(&self) -> &FontCache {
        &self.cache
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_default_dir()
    }
}

/// Render `text` using banks from [`DEFAULT_FONT_DIR`] and default options.
///
/// Builds a fresh engine per call, so nothing is cached between calls;
/// hold an [`Engine`] to reuse loaded banks.
pub fn render(text: &str, selector: &str) -> Result<String, RenderError> {
    Engine::with_default_dir().render(text, selector)
}
