//! Error types for the Typefully client.

/// Result type for client operations.
pub type TypefullyResult<T> = Result<T, TypefullyError>;

/// Error types that can occur when talking to the Typefully API.
#[derive(Debug, thiserror::Error)]
pub enum TypefullyError {
    /// No API key was configured. Checked before any network I/O.
    #[error("TYPEFULLY_API_KEY is not set; configure an API key before calling the Typefully API")]
    MissingApiKey,

    /// API returned a non-success status. The body is relayed as raw text.
    #[error("Typefully API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
