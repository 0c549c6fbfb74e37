//! Error types for the SLD styling crates.

use thiserror::Error;

/// Result type alias using StyleError.
pub type StyleResult<T> = Result<T, StyleError>;

/// Primary error type for style descriptor and icon operations.
///
/// Style *building* never fails: every missing or malformed style property
/// resolves against a documented default. Errors only arise at the edges,
/// when descriptors are parsed from JSON or when icon metadata is fetched.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to parse style descriptor: {0}")]
    ParseError(String),

    #[error("Failed to fetch icon '{src}': {message}")]
    IconFetch { src: String, message: String },

    #[error("Failed to decode icon '{src}': {message}")]
    IconDecode { src: String, message: String },
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::ParseError(err.to_string())
    }
}
