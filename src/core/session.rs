//! Transient per-person conversation state.
//!
//! One sum type covers both pending-input dialogs, so a person can never be
//! awaiting a name and a location at the same time.
//! Nothing here is persisted; a restart drops every dialog back to `Idle`.

use crate::models::RightSet;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    /// Registration gate: free text is interpreted as a name attempt.
    AwaitingName,
    /// "Другое" was chosen: free text is interpreted as a departure location.
    AwaitingLocation,
}

#[derive(Default)]
pub struct Sessions {
    states: Mutex<HashMap<i64, SessionState>>,
}

impl Sessions {
    pub fn get(&self, person_id: i64) -> SessionState {
        self.states
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&person_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn set(&self, person_id: i64, state: SessionState) {
        self.states
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(person_id, state);
    }

    pub fn clear(&self, person_id: i64) {
        self.states
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&person_id);
    }
}

/// In-progress rights selections, keyed by promotion candidate. Seeded from
/// the persisted record when the checkbox menu opens and discarded on save;
/// toggles act on the draft, never on disk.
#[derive(Default)]
pub struct DraftRights {
    drafts: Mutex<HashMap<i64, RightSet>>,
}

impl DraftRights {
    /// Start (or restart) a draft from the given persisted flags.
    pub fn begin(&self, candidate: i64, current: RightSet) -> RightSet {
        self.drafts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(candidate, current);
        current
    }

    /// Toggle one flag in the draft, creating it from `seed` if the menu was
    /// opened before this process started tracking it.
    pub fn toggle(&self, candidate: i64, right: crate::models::Right, seed: RightSet) -> RightSet {
        let mut drafts = self.drafts.lock().unwrap_or_else(|e| e.into_inner());
        let entry = drafts.entry(candidate).or_insert(seed);
        entry.toggle(right);
        *entry
    }

    /// Remove and return the draft; `None` when nothing was toggled.
    pub fn take(&self, candidate: i64) -> Option<RightSet> {
        self.drafts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Right;

    #[test]
    fn session_defaults_to_idle() {
        let sessions = Sessions::default();
        assert_eq!(sessions.get(1), SessionState::Idle);
        sessions.set(1, SessionState::AwaitingName);
        assert_eq!(sessions.get(1), SessionState::AwaitingName);
        sessions.clear(1);
        assert_eq!(sessions.get(1), SessionState::Idle);
    }

    #[test]
    fn draft_toggles_are_independent_of_seed() {
        let drafts = DraftRights::default();
        let seed = RightSet::default();
        drafts.begin(5, seed);
        let after = drafts.toggle(5, Right::Export, seed);
        assert!(after.export);
        // second toggle works on the draft, not on a re-read of the seed
        let after = drafts.toggle(5, Right::Summary, seed);
        assert!(after.export && after.summary);
        assert_eq!(drafts.take(5), Some(after));
        assert_eq!(drafts.take(5), None);
    }
}
