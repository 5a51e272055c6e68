//! Application configuration
//!
//! Split into sections:
//! - `openweather`: forecast API access and icon location
//! - `display`: default city and bucket grouping
//! - `log`: tracing filter and output format
//!
//! Values are layered: built-in defaults, then an optional `config.toml` (or
//! an explicit file), then `CITY_WEATHER__SECTION__KEY` environment variables.

use std::path::Path;

use domain::GroupBy;
use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "CITY_WEATHER";

/// Separator between prefix, section and key in environment overrides
pub const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap configuration
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// OpenWeatherMap API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherAppConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unit system passed to the API
    #[serde(default = "default_units")]
    pub units: String,

    /// Language of weather descriptions
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Base URL of weather icon images
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
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

fn default_icon_base_url() -> String {
    application::DEFAULT_ICON_BASE_URL.to_string()
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            units: default_units(),
            lang: default_lang(),
            timeout_secs: default_timeout_secs(),
            icon_base_url: default_icon_base_url(),
        }
    }
}

impl OpenWeatherAppConfig {
    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Convert to the client configuration of `integration_openweather`
    #[must_use]
    pub fn to_client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            base_url: self.base_url.clone(),
            units: self.units.clone(),
            lang: self.lang.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// What to show and how to group it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// City searched when none is given
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Bucket grouping mode
    #[serde(default)]
    pub group_by: GroupBy,
}

fn default_city() -> String {
    "تهران".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            group_by: GroupBy::default(),
        }
    }
}

/// Tracing output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "warn,integration_openweather=debug"
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Error returned by [`AppConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    /// No usable API key was configured
    #[error(
        "OpenWeatherMap API key is missing; set openweather.api_key, \
         CITY_WEATHER__OPENWEATHER__API_KEY or --api-key"
    )]
    MissingApiKey,

    /// A field has an unusable value
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file plus environment
    ///
    /// The file must exist; its format is derived from the extension.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("openweather.base_url", default_base_url())?
            .set_default("openweather.units", default_units())?
            .set_default("openweather.lang", default_lang())?
            .set_default("display.default_city", default_city())?
            .set_default("log.filter", default_log_filter())?
            // Load from file
            .add_source(file)
            // Override with environment variables (e.g., CITY_WEATHER__OPENWEATHER__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            base_url = %config.openweather.base_url,
            has_api_key = config.openweather.has_api_key(),
            group_by = ?config.display.group_by,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Override the API key, ignoring blank values
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.openweather.api_key = Some(SecretString::from(key));
        }
        self
    }

    /// Check that a search can be attempted with this configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.openweather.has_api_key() {
            return Err(ConfigValidationError::MissingApiKey);
        }
        if self.openweather.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidValue {
                field: "openweather.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.openweather.base_url.trim().is_empty() {
            return Err(ConfigValidationError::InvalidValue {
                field: "openweather.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if let Err(e) = domain::CityQuery::parse(&self.display.default_city) {
            return Err(ConfigValidationError::InvalidValue {
                field: "display.default_city",
                reason: e.to_string(),
            });
        }
        Ok(())
    }
}
