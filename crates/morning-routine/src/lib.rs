//! Offline sections of the morning assistant: breakfast planning, mood
//! videos, the preparation countdown and the daily schedule.

pub mod breakfast;
pub mod error;
pub mod mood;
pub mod schedule;
pub mod timer;

pub use breakfast::{plan_breakfast, Ingredient, IngredientCatalog, MenuSelection};
pub use error::RoutineError;
pub use mood::{videos_for_mood, Mood, Video};
pub use schedule::{parse_schedule, render_schedule, ScheduleForm, ScheduleView};
pub use timer::{run_countdown, CountdownDisplay, CountdownTimer, TimerPhase, TimerState};
