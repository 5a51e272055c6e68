//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The forecast source has no data for the requested city
    #[error("City not found: {0}")]
    NotFound(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The forecast source rejected the credentials
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is transient
    ///
    /// Searches are never retried automatically; the flag is attached to the
    /// failure log of a search.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited | ApplicationError::ExternalService(_)
        )
    }
}
