//! # themeswitch-adapter-web
//!
//! Browser implementations of the `themeswitch-app` ports, built on `web-sys`.
//!
//! | Type | Port | Browser API |
//! |------|------|-------------|
//! | [`LocalStorage`] | `PreferenceStore` | `window.localStorage` |
//! | [`HtmlRoot`] | `DocumentRoot` | `document.documentElement` |
//! | [`DomLifecycle`] | `PageLifecycle` | `DOMContentLoaded` on `document` |
//!
//! ## Dependency rule
//!
//! Depends on `themeswitch-app` (port traits) and `themeswitch-domain` only.
//! All calls are synchronous; nothing here spawns futures.

mod document;
mod error;
mod lifecycle;
mod storage;

pub use document::HtmlRoot;
pub use error::WebError;
pub use lifecycle::DomLifecycle;
pub use storage::LocalStorage;
