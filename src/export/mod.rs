//! Attendance report export.

pub mod filter;
pub mod xlsx;

pub use filter::ReportRange;

use crate::errors::{AppError, AppResult};
use crate::models::AttendanceEvent;
use chrono::NaiveDateTime;

/// Hard cap on exported rows; larger selections are rejected outright.
pub const EXPORT_LIMIT: usize = 10_000;

/// Filter the full log by `range`. Empty selections and selections over the
/// cap are rejected — no file is produced for either.
pub fn select_rows(
    events: &[AttendanceEvent],
    range: ReportRange,
    now: NaiveDateTime,
) -> AppResult<Vec<AttendanceEvent>> {
    let selected: Vec<AttendanceEvent> = events
        .iter()
        .filter(|e| range.contains(e.timestamp, now))
        .cloned()
        .collect();
    if selected.is_empty() {
        return Err(AppError::ExportEmpty);
    }
    if selected.len() > EXPORT_LIMIT {
        return Err(AppError::ExportTooLarge(EXPORT_LIMIT));
    }
    Ok(selected)
}
