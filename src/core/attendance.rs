//! The attendance state machine.
//!
//! Per person there are exactly two states: `Out` (no event yet, or the last
//! event is a departure) and `In` (the last event is an arrival). A mark is
//! legal only when it flips the state; an illegal mark writes nothing.

use crate::models::{Action, AttendanceEvent};
use crate::store::Store;
use chrono::{Local, NaiveDateTime};

/// Placeholder location stored with arrival events.
pub const NO_LOCATION: &str = "-";

/// Minimum length (in characters, after trimming) for a free-text location.
pub const MIN_LOCATION_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    In,
    Out,
}

/// Rejected state transitions. These are conversation outcomes, not faults:
/// the actor gets a warning and nothing is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkError {
    /// `mark_arrived` while already `In`.
    AlreadyIn,
    /// `mark_departed` while already `Out`.
    AlreadyOut,
}

/// Current state, derived from the person's most recent event.
pub fn presence(store: &Store, person_id: i64) -> Presence {
    match store.events.last_for(person_id) {
        Some(e) if e.action == Action::Arrived => Presence::In,
        _ => Presence::Out,
    }
}

pub fn mark_arrived(store: &Store, person_id: i64, name: &str) -> Result<AttendanceEvent, MarkError> {
    mark_arrived_at(store, person_id, name, Local::now().naive_local())
}

pub fn mark_departed(
    store: &Store,
    person_id: i64,
    name: &str,
    location: &str,
) -> Result<AttendanceEvent, MarkError> {
    mark_departed_at(store, person_id, name, location, Local::now().naive_local())
}

/// Explicit-clock variant, used directly by tests.
pub fn mark_arrived_at(
    store: &Store,
    person_id: i64,
    name: &str,
    now: NaiveDateTime,
) -> Result<AttendanceEvent, MarkError> {
    if presence(store, person_id) == Presence::In {
        return Err(MarkError::AlreadyIn);
    }
    let event = AttendanceEvent {
        timestamp: now,
        person_id,
        name: name.to_string(),
        action: Action::Arrived,
        location: NO_LOCATION.to_string(),
    };
    store.events.append(&event);
    Ok(event)
}

/// Explicit-clock variant, used directly by tests.
pub fn mark_departed_at(
    store: &Store,
    person_id: i64,
    name: &str,
    location: &str,
    now: NaiveDateTime,
) -> Result<AttendanceEvent, MarkError> {
    if presence(store, person_id) == Presence::Out {
        return Err(MarkError::AlreadyOut);
    }
    let event = AttendanceEvent {
        timestamp: now,
        person_id,
        name: name.to_string(),
        action: Action::Departed,
        location: location.to_string(),
    };
    store.events.append(&event);
    Ok(event)
}

/// Free-text location rule for the "Другое" flow.
pub fn is_valid_free_location(text: &str) -> bool {
    text.trim().chars().count() >= MIN_LOCATION_LEN
}
