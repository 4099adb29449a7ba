//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the controller and the browser. They are
//! synchronous and take `&self`: the browser accesses storage and the DOM
//! synchronously on a single thread, so implementations rely on interior
//! mutability rather than `&mut self`.

pub mod document_root;
pub mod page_lifecycle;
pub mod preference_store;

pub use document_root::DocumentRoot;
pub use page_lifecycle::{ContentLoadedCallback, PageLifecycle};
pub use preference_store::PreferenceStore;
