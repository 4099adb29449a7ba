//! Page lifecycle whose milestones fire on demand.

use std::cell::{Cell, RefCell};

use themeswitch_app::ports::{ContentLoadedCallback, PageLifecycle};
use themeswitch_domain::error::ThemeError;

/// A page lifecycle driven by the caller.
///
/// Callbacks queue up until [`ManualLifecycle::fire_content_loaded`] runs
/// them. The milestone fires only once per page; callbacks registered after
/// it run immediately.
#[derive(Default)]
pub struct ManualLifecycle {
    pending: RefCell<Vec<ContentLoadedCallback>>,
    loaded: Cell<bool>,
}

impl ManualLifecycle {
    /// Create a lifecycle still in the "loading" state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether content-loaded has fired.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    /// Number of callbacks waiting for content-loaded.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Fire content-loaded and return how many callbacks ran.
    ///
    /// Firing again is a no-op that returns `0`.
    pub fn fire_content_loaded(&self) -> usize {
        if self.loaded.replace(true) {
            return 0;
        }
        // Release the borrow before running: a callback may register another.
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        let count = pending.len();
        for callback in pending {
            callback();
        }
        tracing::trace!(count, "content loaded");
        count
    }
}

impl PageLifecycle for ManualLifecycle {
    fn on_content_loaded(&self, callback: ContentLoadedCallback) -> Result<(), ThemeError> {
        if self.loaded.get() {
            callback();
        } else {
            self.pending.borrow_mut().push(callback);
        }
        Ok(())
    }
}
