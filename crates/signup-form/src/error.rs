//! Error types for the signup form

use thiserror::Error;

/// Signup form error type
///
/// Field validation failures are not errors: they travel as
/// [`ValidationResult`](crate::ValidationResult) values. Everything here is an
/// infrastructure failure that the controller logs and absorbs.
#[derive(Error, Debug)]
pub enum FormError {
    /// Key-value store failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Persisted draft could not be decoded
    #[error("malformed draft: {0}")]
    Draft(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("endpoint returned status {status}: {body}")]
    Response { status: u16, body: String },

    /// Transport-level failure outside the HTTP client
    #[error("transport error: {0}")]
    Transport(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration value rejected
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for signup form operations
pub type Result<T> = std::result::Result<T, FormError>;
