//! # themeswitch-domain
//!
//! Pure domain model for the themeswitch theme preference controller.
//!
//! ## Responsibilities
//! - Define the **Theme** value (`"dark"` or the empty default palette)
//! - Define the two-state **toggle rule** (`dark` → default, anything else → `dark`)
//! - Define the **presence rule** for stored values (absent and empty are the same)
//! - Define the error type that port implementations report through
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser bindings.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod theme;
