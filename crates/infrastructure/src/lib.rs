//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the OpenWeatherMap forecast adapter, configuration loading and
//! tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, ConfigValidationError, DisplayConfig, LogConfig, OpenWeatherAppConfig,
};
pub use telemetry::{TelemetryError, init_telemetry};
