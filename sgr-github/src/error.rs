/// Error types for fetching and parsing contribution calendars
use thiserror::Error;

/// Main error type for contribution calendar operations
#[derive(Error, Debug)]
pub enum ContribError {
    /// The GraphQL endpoint answered with a non-success status
    #[error("GitHub API request failed with status {status}: {detail}")]
    Request { status: u16, detail: String },

    /// Response body does not have the expected nested shape
    #[error("Malformed GitHub API response: {0}")]
    MalformedResponse(String),

    /// Transport failure or timeout
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Bearer credential was not provided
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,
}

/// Type alias for Results using ContribError
pub type Result<T> = std::result::Result<T, ContribError>;
