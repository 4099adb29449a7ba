//! Document root port — the attribute styling rules select a palette from.

use std::rc::Rc;

use themeswitch_domain::error::ThemeError;

/// The page's top-level element, seen only through its attributes.
pub trait DocumentRoot {
    /// Read attribute `name`, or `None` when it is not set.
    ///
    /// An attribute set to the empty string is returned as `Some("")`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] when the root element is unavailable.
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError>;

    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] when the root element is unavailable
    /// or rejects the attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

impl<T: DocumentRoot + ?Sized> DocumentRoot for Rc<T> {
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_attribute(name, value)
    }
}
