//! # themeswitch-app
//!
//! Application layer — the theme controller and its **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — get/set a string by key, shared across tabs of an origin
//!   - `DocumentRoot` — get/set an attribute on the page's root element
//!   - `PageLifecycle` — one-shot "content loaded" callback registration
//! - Define the **driving/inbound** use-case: `ThemeController`
//!   (apply the saved theme, toggle, inspect) and `install` (page boot sequence)
//! - Define `ThemeConfig`, the names the controller reads and writes
//!
//! ## Dependency rule
//! Depends on `themeswitch-domain` only (plus `serde` and `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod controller;
pub mod ports;
