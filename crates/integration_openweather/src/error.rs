//! Forecast client errors

use thiserror::Error;

/// Errors returned by the OpenWeatherMap client
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Client could not be configured
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to the forecast service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the forecast service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API key was rejected
    #[error("Unauthorized: invalid or missing API key")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
