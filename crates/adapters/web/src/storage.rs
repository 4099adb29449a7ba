//! `window.localStorage` as a preference store.

use themeswitch_app::ports::PreferenceStore;
use themeswitch_domain::error::ThemeError;
use web_sys::{Storage, Window};

use crate::error::WebError;

/// The origin's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open `localStorage` for `window`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::StorageUnavailable`] when the browser has no
    /// `localStorage` or blocks it, or [`WebError::Js`] when accessing it
    /// throws (e.g. a `SecurityError` for opaque origins).
    pub fn from_window(window: &Window) -> Result<Self, WebError> {
        let storage = window
            .local_storage()
            .map_err(|err| WebError::js(&err))?
            .ok_or(WebError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|err| ThemeError::storage(WebError::js(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| ThemeError::storage(WebError::js(&err)))
    }
}
