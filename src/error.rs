//! Error type shared by the theme adapters.
//!
//! None of these escape the browser entrypoint: the controller logs them and
//! falls back to the light theme or skips the failing step.

/// Failure reported by a storage, media, or DOM adapter.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A string that is not exactly `"light"` or `"dark"`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// `localStorage` is missing or rejected the read/write.
    #[error("theme storage unavailable: {0}")]
    Storage(String),
    /// The document, root element, or media query API misbehaved.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// Config overrides could not be parsed.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}
