//! `document.documentElement` as the theme root.

use themeswitch_app::ports::DocumentRoot;
use themeswitch_domain::error::ThemeError;
use web_sys::{Document, Element};

use crate::error::WebError;

/// The `<html>` element of a document.
#[derive(Debug, Clone)]
pub struct HtmlRoot {
    element: Element,
}

impl HtmlRoot {
    /// Use the root element of `document`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::NoRootElement`] for an empty document.
    pub fn from_document(document: &Document) -> Result<Self, WebError> {
        let element = document
            .document_element()
            .ok_or(WebError::NoRootElement)?;
        Ok(Self { element })
    }
}

impl DocumentRoot for HtmlRoot {
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.element.get_attribute(name))
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| ThemeError::document(WebError::js(&err)))
    }
}
