//! Unit summary: who is present, who is away and where.
//!
//! Recomputed from scratch on every invocation, interactive or scheduled;
//! nothing is cached between calls.

use super::attendance::{self, Presence};
use crate::store::Store;
use crate::utils::clean_location;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UnitSummary {
    /// Present, alphabetical by display name.
    pub present: Vec<String>,
    /// Absent, alphabetical, paired with the cleaned location of the last
    /// departure (`-` for people with no events yet).
    pub absent: Vec<(String, String)>,
}

pub fn build(store: &Store) -> UnitSummary {
    let mut summary = UnitSummary::default();
    for person in store.people.all_sorted() {
        match attendance::presence(store, person.id) {
            Presence::In => summary.present.push(person.name),
            Presence::Out => {
                let location = store
                    .events
                    .last_for(person.id)
                    .map(|e| clean_location(&e.location))
                    .unwrap_or_else(|| "-".to_string());
                summary.absent.push((person.name, location));
            }
        }
    }
    // all_sorted is already alphabetical; keep the partition sorted anyway
    summary.present.sort();
    summary.absent.sort();
    summary
}

/// Two labeled, counted lists — the same text the admin menu and the 19:00
/// scheduled report deliver.
pub fn render(summary: &UnitSummary) -> String {
    let mut out = format!("👥 В части ({}):\n", summary.present.len());
    for name in &summary.present {
        out.push_str(&format!("— {name}\n"));
    }
    if !summary.absent.is_empty() {
        out.push_str(&format!("\n🚶 Вне части ({}):\n", summary.absent.len()));
        for (name, location) in &summary.absent {
            out.push_str(&format!("— {name} ({location})\n"));
        }
    }
    out
}
