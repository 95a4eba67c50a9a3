use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Bot configuration, loaded from a YAML file with compiled defaults for
/// anything missing. The operating credential is deliberately not part of
/// this file — it comes from the `TELEGRAM_TOKEN` environment variable.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_users_file")]
    pub users_file: String,
    #[serde(default = "default_admins_file")]
    pub admins_file: String,
    #[serde(default = "default_attendance_file")]
    pub attendance_file: String,
    /// The root administrator: implicit all-permissions, never in admins.csv.
    #[serde(default = "default_root_admin_id")]
    pub root_admin_id: i64,
    /// Local wall-clock time of the evening reminder sweep, `HH:MM`.
    #[serde(default = "default_reminder_at")]
    pub reminder_at: String,
    /// Local wall-clock time of the end-of-day summary, `HH:MM`.
    #[serde(default = "default_report_at")]
    pub report_at: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}
fn default_users_file() -> String {
    "users.csv".to_string()
}
fn default_admins_file() -> String {
    "admins.csv".to_string()
}
fn default_attendance_file() -> String {
    "attendance.csv".to_string()
}
fn default_root_admin_id() -> i64 {
    7973895358
}
fn default_reminder_at() -> String {
    "18:30".to_string()
}
fn default_report_at() -> String {
    "19:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: default_users_file(),
            admins_file: default_admins_file(),
            attendance_file: default_attendance_file(),
            root_admin_id: default_root_admin_id(),
            reminder_at: default_reminder_at(),
            report_at: default_report_at(),
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &str = "tabelbot.yaml";

    /// Load configuration from `path` (or the default location). A missing
    /// or unparsable file degrades to defaults — only the missing token is
    /// fatal at startup, and that is handled elsewhere.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(Self::DEFAULT_PATH));
        match fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("cannot parse {}: {e}; using defaults", path.display());
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn reminder_time(&self) -> NaiveTime {
        parse_hhmm(&self.reminder_at, NaiveTime::from_hms_opt(18, 30, 0).unwrap_or_default())
    }

    pub fn report_time(&self) -> NaiveTime {
        parse_hhmm(&self.report_at, NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default())
    }
}

fn parse_hhmm(s: &str, fallback: NaiveTime) -> NaiveTime {
    match NaiveTime::parse_from_str(s, "%H:%M") {
        Ok(t) => t,
        Err(_) => {
            log::warn!("invalid schedule time {s:?}; falling back to {fallback}");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults_cover_every_field() {
        let cfg = Config::default();
        assert_eq!(cfg.root_admin_id, 7973895358);
        assert_eq!(cfg.reminder_time(), NaiveTime::from_hms_opt(18, 30, 0).unwrap());
        assert_eq!(cfg.report_time(), NaiveTime::from_hms_opt(19, 0, 0).unwrap());
    }

    #[test]
    fn bad_schedule_time_falls_back() {
        let cfg = Config {
            reminder_at: "25:99".into(),
            ..Config::default()
        };
        assert_eq!(cfg.reminder_time(), NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    }
}
