//! OpenWeatherMap client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the forecast client
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API key (`APPID` query parameter); required to build a client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unit system: "metric", "imperial" or "standard"
    #[serde(default = "default_units")]
    pub units: String,

    /// Language for weather descriptions (default: "fa")
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "fa".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            units: default_units(),
            lang: default_lang(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("units", &self.units)
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
