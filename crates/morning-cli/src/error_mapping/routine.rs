use morning_core::{AppError, ValidationError};
use morning_routine::RoutineError;

use super::IntoAppError;

impl IntoAppError for RoutineError {
    fn into_app_error(self) -> AppError {
        let validation = match self {
            RoutineError::NoIngredients => ValidationError::NoIngredients,
            RoutineError::DurationOutOfRange(minutes) => {
                ValidationError::DurationOutOfRange { minutes }
            }
            RoutineError::UnknownMood(mood) => ValidationError::UnknownMood(mood),
        };
        AppError::Validation(validation)
    }
}
