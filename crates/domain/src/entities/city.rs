//! City metadata passed through from the forecast payload

use serde::{Deserialize, Serialize};

use crate::formatting::group_thousands;

/// Name and population of the city a forecast belongs to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityInfo {
    /// City name as returned by the source (localized when available)
    pub name: String,
    /// Population, 0 when the source does not know it
    pub population: u64,
}

impl CityInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            population,
        }
    }

    /// Population with `,` thousands separators
    #[must_use]
    pub fn formatted_population(&self) -> String {
        group_thousands(self.population)
    }
}
