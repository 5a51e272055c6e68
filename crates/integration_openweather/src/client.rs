//! OpenWeatherMap forecast client
//!
//! HTTP client for the `/forecast` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::OpenWeatherConfig;
use crate::error::ForecastError;
use crate::models::ForecastResponse;

/// Forecast client trait
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Get the 5-day / 3-hour forecast for a city name
    async fn get_forecast(&self, city: &str) -> Result<ForecastResponse, ForecastError>;
}

/// OpenWeatherMap HTTP client implementation
pub struct OpenWeatherMapClient {
    client: Client,
    api_key: String,
    config: OpenWeatherConfig,
}

impl std::fmt::Debug for OpenWeatherMapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherMapClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be
    /// initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ForecastError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ForecastError::ConfigurationError("OpenWeatherMap API key is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Endpoint URL for forecast requests
    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-success status to an error
    fn status_error(status: StatusCode, city: &str) -> ForecastError {
        match status {
            StatusCode::UNAUTHORIZED => ForecastError::Unauthorized,
            StatusCode::NOT_FOUND => ForecastError::CityNotFound(city.to_string()),
            StatusCode::TOO_MANY_REQUESTS => ForecastError::RateLimitExceeded,
            s if s.is_server_error() => ForecastError::ServiceUnavailable(format!("HTTP {s}")),
            s => ForecastError::RequestFailed(format!("HTTP {s}")),
        }
    }
}

#[async_trait]
impl ForecastClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(units = %self.config.units, lang = %self.config.lang))]
    async fn get_forecast(&self, city: &str) -> Result<ForecastResponse, ForecastError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ForecastError::RequestFailed(
                "City name cannot be empty".to_string(),
            ));
        }

        let url = self.forecast_url();
        // the key is a query parameter, so only the bare endpoint is logged
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.config.units.as_str()),
                ("lang", self.config.lang.as_str()),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the full URL, including the key
                ForecastError::RequestFailed(e.without_url().to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, city));
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| ForecastError::ParseError(e.without_url().to_string()))?;

        debug!(
            entries = forecast.list.len(),
            city = %forecast.city.name,
            "Forecast received"
        );
        Ok(forecast)
    }
}
