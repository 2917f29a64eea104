//! In-memory adapters for running the controller outside a browser.
//!
//! Interior mutability mirrors the `&self` API of the `web-sys` handles they
//! stand in for. All of them are single-threaded.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::env::{ColorSchemeSignal, PreferenceStore, ThemeRoot, ToggleControl};
use crate::error::ThemeError;

/// Map-backed [`PreferenceStore`]. An unavailable store fails every call,
/// like a browser with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self { entries: RefCell::default(), unavailable: true }
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Current value under `key`, bypassing availability.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::Storage("memory store disabled".into()));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::Storage("memory store disabled".into()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Color-scheme signal with a fixed answer. `None` models a missing
/// `matchMedia`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScheme(Option<bool>);

impl FixedScheme {
    pub fn dark() -> Self {
        Self(Some(true))
    }

    pub fn light() -> Self {
        Self(Some(false))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl ColorSchemeSignal for FixedScheme {
    fn matches(&self, _query: &str) -> Result<bool, ThemeError> {
        self.0.ok_or_else(|| ThemeError::Dom("matchMedia unavailable".into()))
    }
}

/// Attribute map standing in for `<html>`.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    attributes: RefCell<HashMap<String, String>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        self
    }
}

impl ThemeRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Toggle control whose clicks are driven by [`MemoryToggle::click`].
#[derive(Default)]
pub struct MemoryToggle {
    handlers: RefCell<Vec<Box<dyn Fn()>>>,
}

impl MemoryToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every registered click handler in registration order.
    pub fn click(&self) {
        for handler in self.handlers.borrow().iter() {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl ToggleControl for MemoryToggle {
    fn on_click(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}
