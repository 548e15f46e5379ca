//! # Error Handling
//!
//! [`SharedError`] covers the few things that can go wrong in the landing
//! page: malformed embedded resources or theme overrides, and failures
//! reported by the hosting browser when opening a link.
//!
//! A missing translation is deliberately *not* an error; see
//! [`Translator::translate`](crate::i18n::Translator::translate).

use thiserror::Error;

/// Convenience type alias for `Result<T, SharedError>`.
pub type Result<T> = std::result::Result<T, SharedError>;

#[derive(Debug, Error)]
pub enum SharedError {
    /// An embedded translation resource is not a flat JSON string map.
    #[error("Translation resource for '{locale}' is invalid: {source}")]
    TranslationParse {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Theme tokens failed to deserialize.
    #[error("Invalid theme: {0}")]
    InvalidTheme(#[from] serde_json::Error),

    /// The host refused to open an outbound link.
    #[error("Navigation error: {0}")]
    Navigation(String),
}
