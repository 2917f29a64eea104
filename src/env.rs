//! Seams between the controller and the page.
//!
//! DESIGN
//! ======
//! Every browser handle the controller needs is injected through one of these
//! traits instead of being captured from `window`/`document` globals. The
//! `browser` module implements them over `web-sys`; `memory` implements them
//! for native tests.

use crate::error::ThemeError;

/// Origin-scoped key/value persistence (`localStorage`).
pub trait PreferenceStore {
    /// Read the raw stored string, `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when storage is missing or the read fails.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when storage is missing or full.
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// OS-level color-scheme preference (`matchMedia`).
pub trait ColorSchemeSignal {
    /// Whether `query` currently matches.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the media query API is unavailable.
    fn matches(&self, query: &str) -> Result<bool, ThemeError>;
}

/// The document root element.
pub trait ThemeRoot {
    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the element rejects the write.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// A clickable control that flips the theme.
pub trait ToggleControl {
    /// Register `handler` to run on every click for the page's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the listener cannot be attached.
    fn on_click(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError>;
}
