//! Forecast source port
//!
//! Defines the interface for fetching a multi-day forecast for a city.

use async_trait::async_trait;
use domain::{CityQuery, ForecastPayload};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the forecast data source
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the forecast for a city
    ///
    /// Samples are returned in the order the source delivered them.
    async fn fetch_forecast(&self, city: &CityQuery) -> Result<ForecastPayload, ApplicationError>;
}
