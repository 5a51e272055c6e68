//! Application layer - Use cases and orchestration
//!
//! Drives a city search through its lifecycle, hands successful payloads to
//! the daily bucketer and turns buckets into display cards. The forecast
//! source is reached through [`ports::ForecastPort`], implemented by the
//! infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
