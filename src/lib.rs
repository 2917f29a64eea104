//! # theme-toggle
//!
//! Light/dark theme switching for a server-rendered page, compiled to WASM.
//! Picks the stored preference (or the OS color scheme on first visit),
//! writes it to the root element's `data-theme` attribute, and keeps
//! `localStorage` in sync whenever the toggle control is clicked.
//!
//! The controller is generic over its storage, color-scheme signal, and root
//! element so the same logic runs against `web-sys` handles in the browser
//! (`hydrate` feature) and against in-memory adapters in native tests.

pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod lifecycle;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;
