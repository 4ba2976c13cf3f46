pub mod config;
pub mod error;

pub use config::{Config, ConfigValidationError, TimerConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError, ValidationError, WeatherError};

use anyhow::Result;

/// Initialize logging for the process.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used. Logs go to
/// stderr so section output on stdout stays readable.
pub fn init(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!("Morning core initialized");
    Ok(())
}
