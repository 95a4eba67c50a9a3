//! Daily timers.
//!
//! Each job runs on its own detached thread: compute the next occurrence of
//! a fixed local wall-clock time, sleep until then, fire, repeat. There is
//! no missed-tick recovery — a restart recomputes the next occurrence fresh.

use chrono::{Days, Local, NaiveDateTime, NaiveTime};
use std::thread;
use std::time::Duration;

/// Next occurrence of `at` relative to `now`: today if `at` has not strictly
/// passed (an exact hit fires immediately), otherwise tomorrow.
pub fn next_occurrence(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(at);
    if now > today {
        today
            .checked_add_days(Days::new(1))
            .unwrap_or(today)
    } else {
        today
    }
}

/// Spawn a daily job thread. The handle is normally dropped — the loop runs
/// for the life of the process.
pub fn spawn_daily<F>(label: &'static str, at: NaiveTime, job: F) -> thread::JoinHandle<()>
where
    F: Fn() + Send + 'static,
{
    thread::Builder::new()
        .name(format!("daily-{label}"))
        .spawn(move || loop {
            let now = Local::now().naive_local();
            let next = next_occurrence(now, at);
            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
            log::info!("{label}: next run at {next}");
            thread::sleep(wait);
            job();
        })
        .unwrap_or_else(|e| panic!("failed to spawn {label} scheduler: {e}"))
}

#[cfg(test)]
mod tests {
    use super::next_occurrence;
    use chrono::{NaiveDate, NaiveTime};

    fn clock(h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn past_target_rolls_to_tomorrow() {
        let at = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
        let next = next_occurrence(clock(18, 45), at);
        assert_eq!(
            next,
            NaiveDate::from_ymd_opt(2025, 6, 11)
                .unwrap()
                .and_time(at)
        );
    }

    #[test]
    fn future_target_stays_today() {
        let at = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        let next = next_occurrence(clock(8, 0), at);
        assert_eq!(next, clock(19, 0));
    }

    #[test]
    fn exact_hit_fires_now() {
        let at = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
        assert_eq!(next_occurrence(clock(18, 30), at), clock(18, 30));
    }
}
