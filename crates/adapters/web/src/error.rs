//! Browser adapter error types.

use wasm_bindgen::JsValue;

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Not running in a window context (e.g. inside a worker).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no root element.
    #[error("document has no root element")]
    NoRootElement,

    /// `localStorage` is missing or blocked for this origin.
    #[error("localStorage is unavailable")]
    StorageUnavailable,

    /// A browser API threw.
    #[error("JavaScript exception: {0}")]
    Js(String),
}

impl WebError {
    /// Capture a thrown JavaScript value as text.
    ///
    /// `JsValue` is neither `Send` nor `Sync`, so only its description is kept.
    pub(crate) fn js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
