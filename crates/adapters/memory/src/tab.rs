//! A simulated browsing context.

use std::rc::Rc;

use themeswitch_app::config::ThemeConfig;
use themeswitch_app::controller::{install, ThemeController};
use themeswitch_domain::error::ThemeError;
use themeswitch_domain::theme::Theme;

use crate::document::MemoryDocument;
use crate::lifecycle::ManualLifecycle;
use crate::storage::OriginStorage;

/// One page load in one tab of an origin.
pub struct Tab {
    document: MemoryDocument,
    lifecycle: ManualLifecycle,
    controller: Rc<ThemeController<OriginStorage, MemoryDocument>>,
}

impl Tab {
    /// Open a page: evaluate the theme script against a fresh root element.
    ///
    /// The saved theme is applied before this returns. The page stays in the
    /// loading state until [`Tab::finish_loading`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the origin storage is disabled.
    pub fn open(origin: &OriginStorage, config: ThemeConfig) -> Result<Self, ThemeError> {
        let document = MemoryDocument::new();
        let lifecycle = ManualLifecycle::new();
        let controller = Rc::new(ThemeController::new(
            origin.clone(),
            document.clone(),
            config,
        ));
        install(Rc::clone(&controller), &lifecycle)?;
        Ok(Self {
            document,
            lifecycle,
            controller,
        })
    }

    /// Reach the content-loaded milestone. Returns how many callbacks ran.
    pub fn finish_loading(&self) -> usize {
        self.lifecycle.fire_content_loaded()
    }

    /// Whether content-loaded has fired for this page.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.lifecycle.is_loaded()
    }

    /// Toggle this page's theme, as a click on its theme button would.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the origin storage is disabled.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        self.controller.toggle()
    }

    /// The root attribute as currently set on this page.
    #[must_use]
    pub fn root_theme(&self) -> Option<String> {
        self.document.get(&self.controller.config().attribute)
    }

    /// The page's root element.
    #[must_use]
    pub fn document(&self) -> &MemoryDocument {
        &self.document
    }
}
