use super::action::Action;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One immutable arrival/departure record. Appended only; the display name
/// is a snapshot taken at mark time so later renames do not rewrite history.
/// Backed by an `attendance.csv` row: `timestamp,id,name,action,location`.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub timestamp: NaiveDateTime,
    pub person_id: i64,
    pub name: String,
    pub action: Action,
    /// Free text or a menu caption; `-` for arrivals.
    pub location: String,
}

impl AttendanceEvent {
    pub fn timestamp_str(&self) -> String {
        format_timestamp(self.timestamp)
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp_str(),
            self.person_id.to_string(),
            self.name.clone(),
            self.action.as_str().to_string(),
            self.location.clone(),
        ]
    }

    /// Malformed rows (bad timestamp, unknown action, short row) yield `None`
    /// and are skipped by the event log.
    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 5 {
            return None;
        }
        Some(Self {
            timestamp: parse_timestamp(&row[0])?,
            person_id: row[1].parse().ok()?,
            name: row[2].clone(),
            action: Action::from_str(&row[3])?,
            location: row[4].clone(),
        })
    }
}
