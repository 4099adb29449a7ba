//! Root element of a single simulated page.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use themeswitch_app::ports::DocumentRoot;
use themeswitch_domain::error::ThemeError;

/// Attribute map of a page's root element.
///
/// Clones are handles to the same element.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    attributes: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryDocument {
    /// Create a root element with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an attribute without going through the port.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

impl DocumentRoot for MemoryDocument {
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.get(name))
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
