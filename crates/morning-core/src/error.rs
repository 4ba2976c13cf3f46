//! Centralized error types for the morning assistant.
//!
//! Each section reports failures through this hierarchy:
//! - Validation problems become inline warnings and stop only that section
//! - Remote failures collapse into one generic message per service
//! - Full context stays in the `Display` output for logging

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` for the text shown in a section's output area.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }

    /// Validation errors are warnings: the section does not run, nothing failed.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Input rejected before a section starts its computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("City name is empty")]
    EmptyCity,

    #[error("No ingredients selected")]
    NoIngredients,

    #[error("Duration {minutes} minutes is outside 1..=10")]
    DurationOutOfRange { minutes: u32 },

    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyCity => "Please enter a city name.",
            ValidationError::NoIngredients => "Please select at least one ingredient.",
            ValidationError::DurationOutOfRange { .. } => {
                "Please choose a duration between 1 and 10 minutes."
            }
            ValidationError::UnknownMood(_) => "Please choose one of the listed moods.",
        }
    }
}

/// Weather service errors.
///
/// Network, auth and unknown-city failures are deliberately indistinguishable
/// to the user.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather unavailable: {0}")]
    Unavailable(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Unavailable(_) => {
                "Could not retrieve weather information. Check the city name or API key."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration file not found. Check the --config path.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
        }
    }
}
