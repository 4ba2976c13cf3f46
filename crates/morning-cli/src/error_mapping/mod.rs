//! Maps section errors to morning_core::AppError for consistent user-facing messages.
//! Each source crate has its own module to keep mappings small and readable.

mod routine;
mod weather;

use morning_core::AppError;

/// Conversion into the shared error type for errors defined in sibling crates.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
