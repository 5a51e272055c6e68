//! Forecast card formatting
//!
//! Turns a [`SearchState`] into presentation-ready data: an optional city
//! header and one card per day bucket. Each card describes the first sample
//! of its bucket (description, icon, day name, Persian date, temperatures and
//! humidity) and additionally carries the bucket-wide temperature range.

use chrono::NaiveDate;
use domain::{BucketedForecast, CityInfo, DayBucket};
use serde::Serialize;

use super::search_session::SearchState;

/// Shown whenever a search produced no cards
pub const NO_RESULTS_MESSAGE: &str = "نتیجه ای یافت نشد. لطفا شهر دیگری وارد کنید.";

/// Page title of the forecast view
pub const TITLE: &str = "آب و هوای شهرها";

/// Default base URL for icon images
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// City line above the cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityHeader {
    pub name: String,
    /// Population with `,` thousands separators
    pub population: String,
}

impl From<&CityInfo> for CityHeader {
    fn from(city: &CityInfo) -> Self {
        Self {
            name: city.name.clone(),
            population: city.formatted_population(),
        }
    }
}

/// One day's card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCard {
    /// Persian weekday name
    pub day_name: String,
    /// Weekday number, Sunday = 0
    pub day_of_week: u8,
    /// Gregorian date of the first sample
    pub date: NaiveDate,
    /// Jalali date with Persian digits
    pub persian_date: String,
    pub description: String,
    pub icon_url: String,
    /// `temp_min` of the first sample in °C
    pub temp_min: f64,
    /// `temp_max` of the first sample in °C
    pub temp_max: f64,
    /// Humidity label of the first sample, e.g. `%75`
    pub humidity: String,
    /// Lowest `temp_min` across the bucket
    pub day_temp_min: f64,
    /// Highest `temp_max` across the bucket
    pub day_temp_max: f64,
    /// Number of samples in the bucket
    pub samples: usize,
}

impl DayCard {
    /// `min°C / max°C`
    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{}°C / {}°C", self.temp_min, self.temp_max)
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastView {
    /// A fetch is in flight
    pub loading: bool,
    /// Present only after a successful search
    pub city: Option<CityHeader>,
    pub cards: Vec<DayCard>,
}

impl ForecastView {
    /// Message to show instead of cards, if any
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        (!self.loading && self.cards.is_empty()).then_some(NO_RESULTS_MESSAGE)
    }
}

/// Builds cards from buckets
#[derive(Debug, Clone)]
pub struct CardFormatter {
    icon_base_url: String,
}

impl Default for CardFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_BASE_URL)
    }
}

impl CardFormatter {
    #[must_use]
    pub fn new(icon_base_url: impl Into<String>) -> Self {
        Self {
            icon_base_url: icon_base_url.into(),
        }
    }

    /// Card for a single bucket
    #[must_use]
    pub fn card(&self, bucket: &DayBucket) -> DayCard {
        let first = bucket.first();
        let day = bucket.day_of_week();
        let (day_temp_min, day_temp_max) = bucket.temperature_range();

        DayCard {
            day_name: day.persian_name().to_string(),
            day_of_week: day.number(),
            date: bucket.date(),
            persian_date: bucket.jalali_date().to_persian_string(),
            description: first.weather.description.clone(),
            icon_url: first.weather.icon.image_url(&self.icon_base_url),
            temp_min: first.temp_min,
            temp_max: first.temp_max,
            humidity: first.humidity.card_label(),
            day_temp_min,
            day_temp_max,
            samples: bucket.len(),
        }
    }

    /// Cards for every bucket, in bucket order
    #[must_use]
    pub fn cards(&self, forecast: &BucketedForecast) -> Vec<DayCard> {
        forecast.iter().map(|bucket| self.card(bucket)).collect()
    }

    /// View model for the current search state
    #[must_use]
    pub fn view(&self, state: &SearchState) -> ForecastView {
        ForecastView {
            loading: state.is_loading(),
            city: state.city().map(CityHeader::from),
            cards: self.cards(state.forecast()),
        }
    }
}
