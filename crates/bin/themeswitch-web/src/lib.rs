//! # themeswitch-web
//!
//! Composition root compiled to WebAssembly:
//!
//! ```html
//! <script type="module">
//!   import init, { toggleTheme } from "/pkg/themeswitch_web.js";
//!   await init();
//!   window.toggleTheme = toggleTheme;
//! </script>
//! ```
//!
//! ## Start timing
//! Browsers instantiate WebAssembly asynchronously and run module scripts
//! only after the document has been parsed, so the first apply happens once
//! the body already exists. A page saved as dark may briefly render with the
//! default palette. For the same reason `DOMContentLoaded` has usually
//! passed by then and the second apply runs right after the first.
//!
//! ## Responsibilities
//! - Load the embedded configuration
//! - Install the console tracing subscriber and panic hook
//! - Construct the browser adapters and the theme controller
//! - Run the boot sequence (apply now, apply again on `DOMContentLoaded`)
//! - Expose the controller only once the boot sequence succeeded
//! - Export `toggleTheme` and `currentTheme` to JavaScript
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no theme logic belongs here.

pub mod config;
mod logging;
mod page;

use themeswitch_adapter_web::{DomLifecycle, HtmlRoot, LocalStorage, WebError};
use themeswitch_app::config::ThemeConfig;
use themeswitch_app::controller::ThemeController;
use themeswitch_domain::error::ThemeError;
use themeswitch_domain::theme::Theme;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::Config;
use crate::page::ActivePage;

thread_local! {
    static PAGE: ActivePage<LocalStorage, HtmlRoot> = const { ActivePage::new() };
}

/// Errors that stop the controller from starting.
#[derive(Debug, thiserror::Error)]
enum StartError {
    #[error("browser environment unavailable")]
    Web(#[from] WebError),
    #[error("initial theme apply failed")]
    Theme(#[from] ThemeError),
}

/// Module entry point, run by `wasm-bindgen` once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    logging::init(&config.logging);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "embedded config rejected, using defaults");
    }

    match boot(config.theme) {
        Ok(()) => tracing::info!("theme controller started"),
        Err(err) => tracing::warn!(error = %err, "theme controller unavailable"),
    }
}

fn boot(config: ThemeConfig) -> Result<(), StartError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let controller = ThemeController::new(
        LocalStorage::from_window(&window)?,
        HtmlRoot::from_document(&document)?,
        config,
    );
    PAGE.with(|page| page.activate(controller, &DomLifecycle::new(document)))?;
    Ok(())
}

/// Flip the page between the dark and default themes and save the choice.
///
/// Wire this to the page's theme button. Failures are logged, never thrown.
/// Before `start` succeeded this does nothing.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    match PAGE.with(ActivePage::toggle) {
        None => tracing::warn!("toggleTheme called without a running theme controller"),
        Some(Err(err)) => tracing::warn!(error = %err, "unable to toggle theme"),
        Some(Ok(_)) => {}
    }
}

/// The theme currently set on `<html>`, or `undefined` when unset.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    match PAGE.with(ActivePage::current_theme)? {
        Ok(theme) => theme.map(Theme::into_inner),
        Err(err) => {
            tracing::warn!(error = %err, "unable to read theme");
            None
        }
    }
}
