//! City query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A trimmed, non-empty city name to search for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityQuery(String);

impl CityQuery {
    /// Maximum accepted length in characters
    pub const MAX_LEN: usize = 100;

    /// Validate and wrap a user-entered city name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityQuery` if the trimmed input is empty
    /// or longer than [`Self::MAX_LEN`] characters.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCityQuery("query is empty".to_string()));
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(DomainError::InvalidCityQuery(format!(
                "query has {len} characters (max {})",
                Self::MAX_LEN
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CityQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CityQuery> for String {
    fn from(query: CityQuery) -> Self {
        query.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
