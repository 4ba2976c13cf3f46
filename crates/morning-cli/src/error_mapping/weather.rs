use morning_core::{AppError, ValidationError, WeatherError};
use morning_weather::WeatherError as ProviderError;

use super::IntoAppError;

impl IntoAppError for ProviderError {
    fn into_app_error(self) -> AppError {
        match self {
            ProviderError::EmptyCity => AppError::Validation(ValidationError::EmptyCity),
            other => AppError::Weather(WeatherError::Unavailable(other.to_string())),
        }
    }
}
