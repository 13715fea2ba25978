//! FontCache - read-through cache of loaded font banks.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::bank::{FontBank, FontSelector};
use super::error::RenderError;

/// Process-lifetime cache of font banks, keyed by selector.
///
/// Each entry is populated on first use and never replaced. Banks are
/// immutable once loaded, so there is no invalidation.
#[derive(Debug)]
pub struct FontCache {
    font_dir: PathBuf,
    validate: bool,
    banks: RwLock<HashMap<FontSelector, Arc<FontBank>>>,
}

impl FontCache {
    /// Create an empty cache reading banks from `font_dir`.
    ///
    /// With `validate` set, undersized banks are rejected at load time and
    /// never cached.
    pub fn new(font_dir: PathBuf, validate: bool) -> Self {
        Self {
            font_dir,
            validate,
            banks: RwLock::new(HashMap::new()),
        }
    }

    /// Get the bank for `selector`, loading it from disk on first use.
    pub fn get(&self, selector: FontSelector) -> Result<Arc<FontBank>, RenderError> {
        if let Some(bank) = self.banks.read().get(&selector) {
            log::debug!("Font cache hit: {}", selector);
            return Ok(Arc::clone(bank));
        }

        log::debug!("Font cache miss: {} (dir {:?})", selector, self.font_dir());
        let bank = FontBank::load(&selector.path_in(self.font_dir()))?;
        if self.validate {
            if let Err(e) = bank.validate(selector) {
                log::warn!("Rejecting font bank: {}", e);
                return Err(e);
            }
        }

        // Another caller may have loaded the same bank meanwhile; keep the first
        let mut banks = self.banks.write();
        let entry = banks.entry(selector).or_insert_with(|| Arc::new(bank));
        Ok(Arc::clone(entry))
    }

    /// Whether `selector` has already been loaded.
    pub fn contains(&self, selector: FontSelector) -> bool {
        self.banks.read().contains_key(&selector)
    }

    /// Number of banks currently cached.
    pub fn len(&self) -> usize {
        self.banks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.read().is_empty()
    }

    /// Get the directory banks are read from.
    pub fn font_dir(&self) -> &Path {
        &self.font_dir
    }
}
