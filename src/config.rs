//! Names the controller touches in the page: storage key, root attribute,
//! toggle element id, and the color-scheme media query.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "expense-receipts-theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute set on the document root element.
    pub attribute: String,
    /// Element id of the optional toggle control.
    pub toggle_id: String,
    /// Media query whose match means the OS prefers dark.
    pub dark_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            dark_query: DEFAULT_DARK_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Build config from a JSON object of overrides.
    ///
    /// Accepted keys: `storage_key`, `attribute`, `toggle_id`, `dark_query`.
    /// Omitted keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON or unknown keys.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
