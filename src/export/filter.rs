//! Date-range predicates for report export.

use chrono::{Days, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRange {
    Today,
    Yesterday,
    LastDays(u64),
}

impl ReportRange {
    /// Map a menu code (`today`, `yesterday`, `7days`, `30days`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "today" => Some(ReportRange::Today),
            "yesterday" => Some(ReportRange::Yesterday),
            "7days" => Some(ReportRange::LastDays(7)),
            "30days" => Some(ReportRange::LastDays(30)),
            _ => None,
        }
    }

    /// Today/yesterday compare calendar days; last-N-days keeps everything
    /// after `now − (N+1) days`.
    pub fn contains(&self, ts: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self {
            ReportRange::Today => ts.date() == now.date(),
            ReportRange::Yesterday => {
                Some(ts.date()) == now.date().checked_sub_days(Days::new(1))
            }
            ReportRange::LastDays(n) => match now.checked_sub_days(Days::new(n + 1)) {
                Some(cutoff) => ts > cutoff,
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn today_is_calendar_day_not_24h_window() {
        let now = at(2025, 6, 10, 12);
        assert!(ReportRange::Today.contains(at(2025, 6, 10, 0), now));
        assert!(ReportRange::Today.contains(at(2025, 6, 10, 11), now));
        assert!(!ReportRange::Today.contains(at(2025, 6, 9, 23), now));
    }

    #[test]
    fn yesterday_matches_previous_day_only() {
        let now = at(2025, 6, 10, 12);
        assert!(ReportRange::Yesterday.contains(at(2025, 6, 9, 23), now));
        assert!(!ReportRange::Yesterday.contains(at(2025, 6, 10, 0), now));
        assert!(!ReportRange::Yesterday.contains(at(2025, 6, 8, 23), now));
    }

    #[test]
    fn last_days_uses_n_plus_one_cutoff() {
        let now = at(2025, 6, 10, 12);
        let range = ReportRange::LastDays(7);
        assert!(range.contains(at(2025, 6, 3, 0), now));
        assert!(!range.contains(at(2025, 6, 2, 11), now));
    }
}
