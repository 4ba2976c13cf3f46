use anyhow::{Context, Result};
use morning_routine::timer::{MAX_MINUTES, MIN_MINUTES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather service settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Countdown timer settings
    #[serde(default)]
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current-weather endpoint of the OpenWeatherMap API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key.
    /// The key itself never lives in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Unit system passed as `units=` (metric gives Celsius)
    #[serde(default = "default_units")]
    pub units: String,

    /// Language of the weather description, passed as `lang=`
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout; unset means the request waits as long as it takes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_weather_base_url() -> String {
    "http://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_api_key_env() -> String {
    "SECRET_API".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "ja".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key_env: default_api_key_env(),
            units: default_units(),
            lang: default_lang(),
            timeout_secs: None,
        }
    }
}

impl WeatherConfig {
    /// Read the API key from the configured environment variable.
    ///
    /// An unset variable yields an empty key; the request then fails remotely
    /// and surfaces as the generic weather error.
    pub fn api_key(&self) -> String {
        match std::env::var(&self.api_key_env) {
            Ok(key) => key,
            Err(_) => {
                tracing::debug!("{} is not set, sending an empty API key", self.api_key_env);
                String::new()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Slider position used when `--minutes` is not given
    #[serde(default = "default_timer_minutes")]
    pub default_minutes: u32,
}

fn default_timer_minutes() -> u32 {
    MIN_MINUTES
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_timer_minutes(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_path()?)
    }

    /// Load `path` if it exists; otherwise use defaults without touching disk
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Uses `path` when given, the default location otherwise. Warnings are
    /// logged; errors fail the load.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);

        if self.weather.api_key_env.trim().is_empty() {
            result.add_error(
                "weather.api_key_env",
                "Environment variable name must not be empty",
            );
        }

        if self.weather.units.trim().is_empty() {
            result.add_error("weather.units", "Units must not be empty");
        }

        if self.weather.lang.trim().is_empty() {
            result.add_warning(
                "weather.lang",
                "No language set, descriptions will use the service default",
            );
        }

        if self.weather.timeout_secs == Some(0) {
            result.add_warning(
                "weather.timeout_secs",
                "A zero timeout makes every request fail",
            );
        }

        if !(MIN_MINUTES..=MAX_MINUTES).contains(&self.timer.default_minutes) {
            result.add_error(
                "timer.default_minutes",
                format!(
                    "Must be between {} and {}, got {}",
                    MIN_MINUTES, MAX_MINUTES, self.timer.default_minutes
                ),
            );
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Get the path to the default configuration file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("morning");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_default_weather_settings() {
        let weather = WeatherConfig::default();
        assert_eq!(weather.base_url, "http://api.openweathermap.org/data/2.5/weather");
        assert_eq!(weather.api_key_env, "SECRET_API");
        assert_eq!(weather.units, "metric");
        assert_eq!(weather.lang, "ja");
        assert!(weather.timeout_secs.is_none());
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.weather.base_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.base_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.base_url = "ftp://api.openweathermap.org/data".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_empty_api_key_env_is_error() {
        let mut config = Config::default();
        config.weather.api_key_env = "  ".to_string();
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "weather.api_key_env"));
    }

    #[test]
    fn test_timer_default_out_of_range() {
        for minutes in [0, 11] {
            let mut config = Config::default();
            config.timer.default_minutes = minutes;
            let result = config.validate();
            assert!(!result.is_valid(), "{} minutes should be rejected", minutes);
            assert!(result.errors.iter().any(|e| e.field == "timer.default_minutes"));
        }
    }

    #[test]
    fn test_empty_lang_is_warning() {
        let mut config = Config::default();
        config.weather.lang = String::new();
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weather.lang"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.weather.lang = "en".to_string();
        config.timer.default_minutes = 5;
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.weather.lang, "en");
        assert_eq!(loaded.timer.default_minutes, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather]\nlang = \"en\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.weather.lang, "en");
        assert_eq!(loaded.weather.units, "metric");
        assert_eq!(loaded.timer.default_minutes, 1);
    }

    #[test]
    fn test_load_validated_rejects_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timer]\ndefault_minutes = 30\n").unwrap();

        let err = Config::load_validated(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("timer.default_minutes"));
    }

    #[test]
    fn test_missing_file_falls_back_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("morning").join("config.toml");

        let config = Config::load_or_default(&path).unwrap();

        assert_eq!(config.timer.default_minutes, MIN_MINUTES);
        assert_eq!(config.weather.lang, "ja");
        assert!(!path.exists());
        assert!(!dir.path().join("morning").exists());
    }

    #[test]
    fn test_existing_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timer]\ndefault_minutes = 4\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.timer.default_minutes, 4);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
