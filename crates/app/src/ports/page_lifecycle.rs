//! Page lifecycle port — explicit registration for host page events.

use themeswitch_domain::error::ThemeError;

/// Callback run once when the page's structural content has been parsed.
pub type ContentLoadedCallback = Box<dyn FnOnce()>;

/// Source of page lifecycle notifications.
pub trait PageLifecycle {
    /// Register `callback` for the "content loaded" milestone.
    ///
    /// The callback runs at most once. If the milestone has already passed
    /// the implementation runs it immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Lifecycle`] when the host refuses the listener.
    fn on_content_loaded(&self, callback: ContentLoadedCallback) -> Result<(), ThemeError>;
}
