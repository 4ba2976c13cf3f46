//! Today's schedule, echoed back from freeform text.

use chrono::NaiveDate;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Characters that end a line. `\r\n` splits into a line and an empty piece,
/// and empty pieces are dropped.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleView {
    /// Today's date as `YYYY-MM-DD`
    pub date: String,
    /// Non-blank trimmed lines, in input order
    pub entries: Vec<String>,
}

/// Split text into trimmed, non-empty lines.
pub fn parse_schedule(text: &str) -> Vec<String> {
    text.split(LINE_BREAKS)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn render_schedule(text: &str, today: NaiveDate) -> ScheduleView {
    ScheduleView {
        date: today.format(DATE_FORMAT).to_string(),
        entries: parse_schedule(text),
    }
}

/// Text area plus submit button.
///
/// Editing only touches the draft; the view is recomputed on `submit` and
/// nowhere else.
#[derive(Debug, Default)]
pub struct ScheduleForm {
    draft: String,
    submitted: Option<ScheduleView>,
}

impl ScheduleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn submit(&mut self, today: NaiveDate) -> &ScheduleView {
        let view = render_schedule(&self.draft, today);
        tracing::debug!("Schedule submitted with {} entries", view.entries.len());
        self.submitted.insert(view)
    }

    /// Last submitted view, if any
    pub fn view(&self) -> Option<&ScheduleView> {
        self.submitted.as_ref()
    }
}
