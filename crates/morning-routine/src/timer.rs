//! Preparation countdown.
//!
//! `CountdownTimer` is the Idle → Running → Complete state machine;
//! `run_countdown` drives it once per second and occupies the caller until
//! the countdown completes. There is no cancel or pause.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::error::RoutineError;

/// Shortest and longest countdown accepted, in minutes
pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 10;

const TICK: Duration = Duration::from_secs(1);

/// Snapshot of a running countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub total_seconds: u32,
    pub elapsed_seconds: u32,
}

impl TimerState {
    pub fn remaining_seconds(&self) -> u32 {
        self.total_seconds.saturating_sub(self.elapsed_seconds)
    }

    /// Fraction elapsed, in `[0, 1)` while running
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        f64::from(self.elapsed_seconds) / f64::from(self.total_seconds)
    }

    /// Remaining time as `minutes:seconds`
    pub fn remaining_display(&self) -> String {
        let remaining = self.remaining_seconds();
        format!("{}:{:02}", remaining / 60, remaining % 60)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running(TimerState),
    Complete,
}

#[derive(Debug, Default)]
pub struct CountdownTimer {
    phase: TimerPhase,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == TimerPhase::Complete
    }

    /// Enter Running with a fresh state. Allowed from any phase.
    pub fn start(&mut self, minutes: u32) -> Result<(), RoutineError> {
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            return Err(RoutineError::DurationOutOfRange(minutes));
        }

        self.phase = TimerPhase::Running(TimerState {
            total_seconds: minutes * 60,
            elapsed_seconds: 0,
        });
        Ok(())
    }

    /// Emit the current state and advance one second.
    ///
    /// Returns `None` unless running. The state returned by the last tick
    /// still has one second remaining; the phase is Complete after it.
    pub fn tick(&mut self) -> Option<TimerState> {
        let TimerPhase::Running(state) = self.phase else {
            return None;
        };

        let elapsed = state.elapsed_seconds + 1;
        self.phase = if elapsed >= state.total_seconds {
            TimerPhase::Complete
        } else {
            TimerPhase::Running(TimerState {
                elapsed_seconds: elapsed,
                ..state
            })
        };

        Some(state)
    }
}

/// Widgets updated by a running countdown
pub trait CountdownDisplay {
    /// Called once per second with the time still remaining
    fn tick(&mut self, state: &TimerState);

    /// Called once after the last second has passed
    fn complete(&mut self);
}

/// Run a countdown of `minutes`, updating `display` once per second.
///
/// Resolves only after the full duration; the last update is followed by one
/// more second before `complete` is called.
pub async fn run_countdown<D>(minutes: u32, display: &mut D) -> Result<(), RoutineError>
where
    D: CountdownDisplay + ?Sized,
{
    let mut timer = CountdownTimer::new();
    timer.start(minutes)?;
    tracing::info!("Countdown started: {} minutes", minutes);

    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while let Some(state) = timer.tick() {
        ticker.tick().await;
        display.tick(&state);
    }
    ticker.tick().await;

    display.complete();
    tracing::info!("Countdown complete");
    Ok(())
}
