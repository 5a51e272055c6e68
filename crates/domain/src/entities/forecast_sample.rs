//! Forecast sample entity
//!
//! One entry of a 3-hourly forecast. Samples are constructed once when the
//! payload is received and only read afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::CityInfo;
use crate::value_objects::{DayOfWeek, Humidity, IconCode};

/// Short weather text plus icon code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDescriptor {
    /// Localized description, e.g. "ابرهای پراکنده"
    pub description: String,
    /// Source icon code, e.g. `03n`
    pub icon: IconCode,
}

impl WeatherDescriptor {
    #[must_use]
    pub fn new(description: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            icon: IconCode::new(icon),
        }
    }
}

/// A single forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Local wall-clock time of the forecast slot
    pub timestamp: NaiveDateTime,
    pub weather: WeatherDescriptor,
    /// Minimum temperature in °C
    pub temp_min: f64,
    /// Maximum temperature in °C
    pub temp_max: f64,
    pub humidity: Humidity,
}

impl ForecastSample {
    #[must_use]
    pub const fn new(
        timestamp: NaiveDateTime,
        weather: WeatherDescriptor,
        temp_min: f64,
        temp_max: f64,
        humidity: Humidity,
    ) -> Self {
        Self {
            timestamp,
            weather,
            temp_min,
            temp_max,
            humidity,
        }
    }

    /// Weekday of the sample's timestamp (Sunday = 0)
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::of(&self.timestamp)
    }

    /// Calendar date of the sample's timestamp
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// A deserialized forecast response: city metadata plus the flat sample list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub city: CityInfo,
    /// Samples in the order delivered by the source
    pub samples: Vec<ForecastSample>,
}

impl ForecastPayload {
    #[must_use]
    pub const fn new(city: CityInfo, samples: Vec<ForecastSample>) -> Self {
        Self { city, samples }
    }
}
