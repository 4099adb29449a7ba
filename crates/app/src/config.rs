//! Theme controller configuration.

use serde::Deserialize;
use themeswitch_domain::theme::Theme;

/// Names the controller reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference store key holding the theme.
    pub storage_key: String,
    /// Root element attribute mirroring the theme.
    pub attribute: String,
    /// Theme value that toggles back to the default palette.
    pub dark: Theme,
}

/// A [`ThemeConfig`] field holds a value the controller cannot use.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidThemeConfig {
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    #[error("invalid attribute name {0:?}")]
    InvalidAttribute(String),

    #[error("dark theme name must not be empty")]
    EmptyDark,
}

impl ThemeConfig {
    /// Check that every name is usable.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThemeConfig`] for an empty storage key, an empty
    /// dark value, or an attribute name that is empty, does not start with
    /// a letter, `_` or `:`, or contains whitespace, quotes, `/`, `=` or `>`.
    pub fn validate(&self) -> Result<(), InvalidThemeConfig> {
        if self.storage_key.is_empty() {
            return Err(InvalidThemeConfig::EmptyStorageKey);
        }
        if !is_attribute_name(&self.attribute) {
            return Err(InvalidThemeConfig::InvalidAttribute(self.attribute.clone()));
        }
        if self.dark.is_default() {
            return Err(InvalidThemeConfig::EmptyDark);
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            dark: Theme::dark(),
        }
    }
}

fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    // `setAttribute` throws `InvalidCharacterError` for anything else.
    (first.is_alphabetic() || matches!(first, '_' | ':'))
        && !chars.any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '/' | '=' | '>')
        })
}
