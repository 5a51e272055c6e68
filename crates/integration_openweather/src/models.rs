//! Forecast response models
//!
//! Types for the OpenWeatherMap `/forecast` JSON payload. Only the fields the
//! cards need are modelled; everything else is ignored.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of the `dt_txt` field
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level `/forecast` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Number of entries in `list`
    #[serde(default)]
    pub cnt: u32,
    /// 3-hourly entries in chronological order
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    pub city: City,
}

/// One 3-hourly forecast entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast time, unix seconds UTC
    pub dt: i64,
    /// Forecast time as text, e.g. `2024-01-15 12:00:00`
    #[serde(default)]
    pub dt_txt: Option<String>,
    pub main: MainMetrics,
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
}

impl ForecastEntry {
    /// Timestamp of the entry
    ///
    /// Uses `dt_txt` when it parses, otherwise the unix `dt` field. Both are
    /// UTC wall-clock times.
    #[must_use]
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.dt_txt
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, DT_TXT_FORMAT).ok())
            .or_else(|| DateTime::from_timestamp(self.dt, 0).map(|dt| dt.naive_utc()))
    }

    /// The primary weather condition, if any was delivered
    #[must_use]
    pub fn primary_weather(&self) -> Option<&WeatherEntry> {
        self.weather.first()
    }
}

/// Main metrics of an entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMetrics {
    /// Temperature in the requested units
    #[serde(default)]
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity in percent
    pub humidity: u16,
}

/// Weather condition of an entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherEntry {
    /// Condition id (e.g. 800 = clear)
    #[serde(default)]
    pub id: u32,
    /// Condition group, e.g. "Clouds"
    #[serde(default)]
    pub main: String,
    /// Localized description
    pub description: String,
    /// Icon code, e.g. "03n"
    pub icon: String,
}

/// City block of the response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Population; absent or 0 when unknown
    #[serde(default)]
    pub population: u64,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: i32,
}
