//! Relative humidity of a forecast slot
//!
//! ```
//! use domain::value_objects::Humidity;
//!
//! assert_eq!(Humidity::clamped(150).value(), 100);
//! assert_eq!(Humidity::clamped(75).card_label(), "%75");
//! assert!(Humidity::new(101).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rejected humidity reading
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("humidity {0} exceeds 100 percent")]
pub struct InvalidHumidity(u8);

/// Percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Humidity(u8);

impl Humidity {
    pub const MAX: u8 = 100;

    /// # Errors
    ///
    /// Returns `InvalidHumidity` above [`Humidity::MAX`].
    pub const fn new(percent: u8) -> Result<Self, InvalidHumidity> {
        if percent <= Self::MAX {
            Ok(Self(percent))
        } else {
            Err(InvalidHumidity(percent))
        }
    }

    /// Saturating constructor for readings from the wire
    #[must_use]
    pub fn clamped(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Sign-first form shown on cards, `%75`
    #[must_use]
    pub fn card_label(self) -> String {
        format!("%{}", self.0)
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Humidity> for u8 {
    fn from(humidity: Humidity) -> Self {
        humidity.0
    }
}
