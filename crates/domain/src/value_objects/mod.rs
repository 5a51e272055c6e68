//! Value Objects - Immutable, identity-less domain primitives

mod city_query;
mod day_of_week;
mod humidity;
mod icon_code;
mod jalali_date;

pub use city_query::CityQuery;
pub use day_of_week::DayOfWeek;
pub use humidity::{Humidity, InvalidHumidity};
pub use icon_code::IconCode;
pub use jalali_date::JalaliDate;
