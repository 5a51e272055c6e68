//! Domain layer for city-weather
//!
//! Contains the forecast entities, the daily bucketing algorithm, value objects
//! for Persian display (weekday names, Jalali dates) and domain errors.
//! This layer performs no I/O.

pub mod bucketing;
pub mod entities;
pub mod errors;
pub mod formatting;
pub mod value_objects;

pub use bucketing::{BucketKey, BucketedForecast, DayBucket, GroupBy, bucket_by, bucket_by_day};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
