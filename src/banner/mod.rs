//! Banner renderer for turning plain text into block-letter art.
//!
//! The pipeline runs leaf to root:
//!
//! 1. **Font bank loading** - read a fixed-stride bank file into rows
//! 2. **Glyph lookup** - address a character's 8 rows by code point
//! 3. **Line normalization** - split input into logical lines
//! 4. **Composition** - stack glyph rows side by side, row by row
//!
//! [`Engine`] ties these together and caches loaded banks.
//!
//! # Font Banks
//!
//! Three banks are available via [`FontSelector`]:
//! - `standard` - classic slanted block letters
//! - `shadow` - letters drawn with drop-shadowed cells
//! - `thinkertoy` - line-art letters with round joints

mod bank;
mod cache;
mod compose;
mod engine;
mod error;
mod glyph;
mod lines;

pub use bank::{FontBank, FontSelector, FIRST_CHAR, FULL_BANK_ROWS, PRINTABLE_CHARS, ROWS_PER_GLYPH};
pub use cache::FontCache;
pub use compose::{compose, MissingGlyph};
pub use engine::{render, Engine, EngineOptions, DEFAULT_FONT_DIR};
pub use error::RenderError;
pub use glyph::{glyph, glyph_row, GLYPH_HEIGHT};
pub use lines::{normalize, validate_ascii, NormalizeOptions};
