//! Origin-scoped key/value storage shared between simulated tabs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use themeswitch_app::ports::PreferenceStore;
use themeswitch_domain::error::ThemeError;

use crate::error::MemoryError;

#[derive(Debug, Default)]
struct Slots {
    values: HashMap<String, String>,
    disabled: bool,
}

/// Storage for one origin.
///
/// Every clone points at the same slots, so handing a clone to each [`Tab`]
/// models several browsing contexts of one origin. Writes are last-write-wins.
///
/// [`Tab`]: crate::Tab
#[derive(Debug, Clone, Default)]
pub struct OriginStorage {
    slots: Arc<Mutex<Slots>>,
}

impl OriginStorage {
    /// Create an empty origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a slot directly, bypassing the disabled flag.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    /// Write a slot directly, bypassing the disabled flag.
    pub fn put(&self, key: &str, value: &str) {
        self.lock()
            .values
            .insert(key.to_string(), value.to_string());
    }

    /// Make every subsequent port call fail, as a browser does when storage
    /// is blocked for the site.
    pub fn disable(&self) {
        self.lock().disabled = true;
    }

    /// Undo [`OriginStorage::disable`].
    pub fn enable(&self) {
        self.lock().disabled = false;
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for OriginStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let slots = self.lock();
        if slots.disabled {
            return Err(MemoryError::StorageDisabled.into());
        }
        Ok(slots.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut slots = self.lock();
        if slots.disabled {
            return Err(MemoryError::StorageDisabled.into());
        }
        slots.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
