//! OpenWeatherMap forecast integration
//!
//! Client for the OpenWeatherMap 5 day / 3 hour forecast API
//! (<https://openweathermap.org/forecast5>). Requests a city by name with
//! metric units and a configurable language, and returns the raw forecast
//! entries in delivery order.

pub mod client;
mod config;
mod error;
mod models;

pub use client::{ForecastClient, OpenWeatherMapClient};
pub use config::OpenWeatherConfig;
pub use error::ForecastError;
pub use models::{City, ForecastEntry, ForecastResponse, MainMetrics, WeatherEntry};
