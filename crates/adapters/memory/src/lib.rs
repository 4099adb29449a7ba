//! # themeswitch-adapter-memory
//!
//! In-memory implementations of every `themeswitch-app` port, for tests and
//! for hosts that render pages without a browser.
//!
//! | Type | Port | Behaviour |
//! |------|------|-----------|
//! | [`OriginStorage`] | `PreferenceStore` | Clones share one store, like tabs of one origin |
//! | [`MemoryDocument`] | `DocumentRoot` | Attribute map of a single page's root element |
//! | [`ManualLifecycle`] | `PageLifecycle` | Content-loaded fires when the test says so |
//! | [`Tab`] | — | One browsing context wired through `install` |
//!
//! ## Dependency rule
//!
//! Depends on `themeswitch-app` (port traits) and `themeswitch-domain` only.

mod document;
mod error;
mod lifecycle;
mod storage;
mod tab;

pub use document::MemoryDocument;
pub use error::MemoryError;
pub use lifecycle::ManualLifecycle;
pub use storage::OriginStorage;
pub use tab::Tab;
