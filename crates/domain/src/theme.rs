//! Theme — the value mirrored between the preference store and the page root.
//!
//! A theme is a plain string. In practice it is either `"dark"` or the empty
//! string, which selects the default palette by omission. Other values are
//! carried verbatim: nothing here validates them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A theme name as stored and as set on the root element.
///
/// The [`Default`] theme is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(String);

impl Theme {
    /// Conventional name of the dark palette.
    pub const DARK: &'static str = "dark";

    /// Wrap an arbitrary theme name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The dark palette (`"dark"`).
    #[must_use]
    pub fn dark() -> Self {
        Self::new(Self::DARK)
    }

    /// Interpret a value read from the preference store.
    ///
    /// Only a non-empty string counts as present: an empty stored value is
    /// treated exactly like a missing one and yields `None`.
    #[must_use]
    pub fn from_stored(stored: Option<String>) -> Option<Self> {
        stored.filter(|value| !value.is_empty()).map(Self)
    }

    /// Compute the theme that follows `current` in the two-state cycle.
    ///
    /// `dark` becomes the default (empty) theme. Everything else, including
    /// an unset attribute, an empty value, or an unknown name, becomes `dark`.
    #[must_use]
    pub fn next(current: Option<&Self>, dark: &Self) -> Self {
        match current {
            Some(theme) if theme == dark => Self::default(),
            _ => dark.clone(),
        }
    }

    /// Borrow the theme name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty default theme.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the theme and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Self(value)
    }
}
