//! `DOMContentLoaded` as the content-loaded milestone.

use themeswitch_app::ports::{ContentLoadedCallback, PageLifecycle};
use themeswitch_domain::error::ThemeError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document};

use crate::error::WebError;

const CONTENT_LOADED: &str = "DOMContentLoaded";

/// Lifecycle of the page that owns `document`.
#[derive(Debug, Clone)]
pub struct DomLifecycle {
    document: Document,
}

impl DomLifecycle {
    /// Watch the lifecycle of `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Whether the document is still being parsed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl PageLifecycle for DomLifecycle {
    fn on_content_loaded(&self, callback: ContentLoadedCallback) -> Result<(), ThemeError> {
        // WebAssembly starts asynchronously; parsing may already be over.
        if !self.is_loading() {
            tracing::trace!("content already loaded");
            callback();
            return Ok(());
        }

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let listener = Closure::once_into_js(move || callback());
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                CONTENT_LOADED,
                listener.unchecked_ref(),
                &options,
            )
            .map_err(|err| ThemeError::lifecycle(WebError::js(&err)))
    }
}
