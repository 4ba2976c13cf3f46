//! Weather & outfit advice for the morning assistant
//!
//! Fetches current conditions for a city from the OpenWeatherMap API and maps
//! the temperature onto one of three outfit tiers.

pub mod provider;
pub mod types;

pub use provider::{ProviderOptions, WeatherProvider, DEFAULT_BASE_URL};
pub use types::*;
