//! Domain entities - Forecast data received from the weather source

mod city;
mod forecast_sample;

pub use city::CityInfo;
pub use forecast_sample::{ForecastPayload, ForecastSample, WeatherDescriptor};
