//! Time utilities: attendance timestamps use the fixed `DD.MM.YYYY HH:MM:SS`
//! layout both on disk and in outbound messages.

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Split a formatted timestamp into its date and time halves.
pub fn split_date_time(dt: &str) -> (String, String) {
    match dt.split_once(' ') {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (dt.to_string(), String::new()),
    }
}
