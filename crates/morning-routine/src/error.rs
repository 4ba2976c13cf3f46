//! Routine-specific error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutineError {
    #[error("No ingredients selected")]
    NoIngredients,

    #[error("Duration {0} minutes is outside 1..=10")]
    DurationOutOfRange(u32),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}

impl RoutineError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoIngredients => "Please select at least one ingredient.".to_string(),
            Self::DurationOutOfRange(_) => {
                "Please choose a duration between 1 and 10 minutes.".to_string()
            }
            Self::UnknownMood(mood) => format!("'{}' is not one of the available moods.", mood),
        }
    }
}
