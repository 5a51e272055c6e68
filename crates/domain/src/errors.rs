//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City query is empty or too long
    #[error("Invalid city query: {0}")]
    InvalidCityQuery(String),

    /// Day-of-week number outside 0-6
    #[error("Invalid day of week: {0} (must be 0-6)")]
    InvalidDayOfWeek(u8),
}
