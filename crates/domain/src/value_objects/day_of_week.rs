//! Day-of-week value object
//!
//! Locale-independent weekday number where Sunday is 0 and Saturday is 6,
//! together with the Persian name shown on forecast cards.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

const PERSIAN_NAMES: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنج\u{200c} شنبه",
    "جمعه",
    "شنبه",
];

/// Weekday number in the range 0-6, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// Create from a number in 0-6
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDayOfWeek` for values above 6.
    pub const fn new(number: u8) -> Result<Self, DomainError> {
        if number > 6 {
            Err(DomainError::InvalidDayOfWeek(number))
        } else {
            Ok(Self(number))
        }
    }

    /// Day of week of a calendar date
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// Day of week of a naive timestamp
    #[must_use]
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self::of_date(timestamp.date())
    }

    /// The 0-6 number
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Persian display name
    #[must_use]
    pub fn persian_name(self) -> &'static str {
        PERSIAN_NAMES[usize::from(self.0)]
    }
}

impl From<Weekday> for DayOfWeek {
    #[allow(clippy::cast_possible_truncation)] // num_days_from_sunday is always < 7
    fn from(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}
