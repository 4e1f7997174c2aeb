//! Search-specific error types.

use thiserror::Error;

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while running a search or location lookup.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No SerpApi credential is configured.
    #[error("SERPAPI_API_KEY is not set")]
    MissingCredential,

    /// The caller tried to set a parameter the gateway owns.
    #[error("Parameter '{0}' is reserved and cannot be overridden")]
    ReservedParameter(String),

    /// The request to the provider failed before an answer was decoded.
    #[error("Search request failed: {0}")]
    Request(String),

    /// The provider did not answer within the configured timeout.
    #[error("Search request timed out after {0}s")]
    Timeout(u64),

    /// The provider answered with an error message.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider response did not have the expected shape.
    #[error("Failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Create a provider error from the message SerpApi returned.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Whether this error was raised locally before any network call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::ReservedParameter(_))
    }
}
