//! Forecast adapter - Implements ForecastPort using integration_openweather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{CityInfo, CityQuery, ForecastPayload, ForecastSample, Humidity, WeatherDescriptor};
use integration_openweather::{
    ForecastClient, ForecastEntry, ForecastError, ForecastResponse, OpenWeatherConfig,
    OpenWeatherMapClient,
};
use tracing::{debug, instrument, warn};

/// Adapter for the OpenWeatherMap 5-day / 3-hour forecast
pub struct ForecastAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl ForecastAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing, or
    /// `ApplicationError::Internal` if the HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration forecast error to application error
    fn map_error(err: ForecastError) -> ApplicationError {
        match err {
            ForecastError::CityNotFound(city) => ApplicationError::NotFound(city),
            ForecastError::Unauthorized => {
                ApplicationError::NotAuthorized("OpenWeatherMap rejected the API key".into())
            },
            ForecastError::RateLimitExceeded => ApplicationError::RateLimited,
            ForecastError::ConfigurationError(e) => ApplicationError::Configuration(e),
            ForecastError::ConnectionFailed(e)
            | ForecastError::RequestFailed(e)
            | ForecastError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            ForecastError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Convert one wire entry into a sample
    ///
    /// Entries without a usable timestamp are dropped.
    fn map_entry(entry: &ForecastEntry) -> Option<ForecastSample> {
        let Some(timestamp) = entry.timestamp() else {
            warn!(
                dt = entry.dt,
                dt_txt = ?entry.dt_txt,
                "Dropping forecast entry with unusable timestamp"
            );
            return None;
        };

        let weather = entry.primary_weather().map_or_else(
            || WeatherDescriptor::new("", ""),
            |w| WeatherDescriptor::new(w.description.clone(), w.icon.clone()),
        );

        let humidity = Humidity::clamped(u8::try_from(entry.main.humidity).unwrap_or(u8::MAX));

        Some(ForecastSample::new(
            timestamp,
            weather,
            entry.main.temp_min,
            entry.main.temp_max,
            humidity,
        ))
    }

    /// Convert the wire response into the domain payload, keeping entry order
    fn map_payload(response: &ForecastResponse) -> ForecastPayload {
        let samples: Vec<ForecastSample> =
            response.list.iter().filter_map(Self::map_entry).collect();

        if samples.len() < response.list.len() {
            debug!(
                received = response.list.len(),
                kept = samples.len(),
                "Some forecast entries were dropped"
            );
        }

        ForecastPayload::new(
            CityInfo::new(response.city.name.clone(), response.city.population),
            samples,
        )
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_forecast(&self, city: &CityQuery) -> Result<ForecastPayload, ApplicationError> {
        let result = self
            .client
            .get_forecast(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(response) => {
                debug!(
                    entries = response.list.len(),
                    city = %response.city.name,
                    "Retrieved forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result.map(|r| Self::map_payload(&r))
    }
}
