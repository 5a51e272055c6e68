//! Weather icon code value object
//!
//! OpenWeatherMap icon codes look like `10n`: two digits for the condition
//! followed by `d` (day) or `n` (night). Cards always show the day variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon code as delivered by the forecast source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconCode(String);

impl IconCode {
    /// Wrap a raw icon code
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First two characters with a forced day suffix (`10n` -> `10d`)
    #[must_use]
    pub fn day_variant(&self) -> String {
        let mut code: String = self.0.chars().take(2).collect();
        code.push('d');
        code
    }

    /// Image URL of the day variant at 2x resolution
    #[must_use]
    pub fn image_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}@2x.png",
            base_url.trim_end_matches('/'),
            self.day_variant()
        )
    }
}

impl fmt::Display for IconCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
