use super::Table;
use crate::models::AttendanceEvent;

/// Append-only attendance log. Rows are never edited; the only destructive
/// operation is the bulk clear behind the danger-zone right.
pub struct EventLog {
    table: Table,
}

impl EventLog {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn append(&self, event: &AttendanceEvent) {
        let row = event.to_row();
        self.table.update(move |rows| rows.push(row));
    }

    /// Full log in append (== chronological) order, bad rows skipped.
    pub fn all(&self) -> Vec<AttendanceEvent> {
        self.table
            .read()
            .iter()
            .filter_map(|row| AttendanceEvent::from_row(row))
            .collect()
    }

    /// Most recent event for one person, scanning backward from the end.
    pub fn last_for(&self, person_id: i64) -> Option<AttendanceEvent> {
        self.all()
            .into_iter()
            .rev()
            .find(|e| e.person_id == person_id)
    }

    /// The person's `n` most recent events, oldest first.
    pub fn recent_for(&self, person_id: i64, n: usize) -> Vec<AttendanceEvent> {
        let mut recent: Vec<AttendanceEvent> = self
            .all()
            .into_iter()
            .rev()
            .filter(|e| e.person_id == person_id)
            .take(n)
            .collect();
        recent.reverse();
        recent
    }

    pub fn clear(&self) {
        self.table.truncate();
    }
}
