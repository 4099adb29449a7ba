//! Preference store port — origin-scoped key/value persistence.

use std::rc::Rc;

use themeswitch_domain::error::ThemeError;

/// Persistent string storage shared by every browsing context of an origin.
///
/// Writes from another context may land between any two calls; the store
/// offers no locking and the last write wins.
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}
