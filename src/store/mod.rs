//! Flat-file record store.
//!
//! Three CSV tables are the single source of truth; every operation re-reads
//! its table from disk, mutations rewrite the whole file. A mutex per table
//! serializes read-modify-write sequences so two simultaneous requests cannot
//! lose an update. Storage failures never surface to callers: unreadable
//! files read as empty tables, failed writes are logged and dropped.

pub mod admins;
pub mod events;
pub mod people;

pub use admins::AdminStore;
pub use events::EventLog;
pub use people::PeopleStore;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One CSV-backed table, headerless and width-tolerant.
pub struct Table {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Table {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row. Missing or unreadable file degrades to an empty table.
    pub fn read(&self) -> Vec<Vec<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_unlocked()
    }

    /// Read, let `apply` mutate the rows, rewrite the file — all under the
    /// table lock.
    pub fn update<F>(&self, apply: F)
    where
        F: FnOnce(&mut Vec<Vec<String>>),
    {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut rows = self.read_unlocked();
        apply(&mut rows);
        self.write_unlocked(&rows);
    }

    /// Drop every row (bulk clear).
    pub fn truncate(&self) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            log::warn!("failed to clear {}: {e}", self.path.display());
        }
    }

    fn read_unlocked(&self) -> Vec<Vec<String>> {
        let reader = match csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };
        let mut rows = Vec::new();
        for record in reader.into_records() {
            match record {
                Ok(rec) => rows.push(rec.iter().map(|f| f.to_string()).collect()),
                Err(e) => log::warn!("skipping bad row in {}: {e}", self.path.display()),
            }
        }
        rows
    }

    fn write_unlocked(&self, rows: &[Vec<String>]) {
        let result = (|| -> Result<(), csv::Error> {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(&self.path)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
            Ok(())
        })();
        if let Err(e) = result {
            log::warn!("failed to write {}: {e}", self.path.display());
        }
    }
}

/// The three unit tables, rooted in one data directory.
pub struct Store {
    pub people: PeopleStore,
    pub admins: AdminStore,
    pub events: EventLog,
}

impl Store {
    pub fn open(data_dir: &Path, users: &str, admins: &str, attendance: &str) -> Self {
        if let Err(e) = fs::create_dir_all(data_dir) {
            log::warn!("cannot create data dir {}: {e}", data_dir.display());
        }
        Self {
            people: PeopleStore::new(Table::new(data_dir.join(users))),
            admins: AdminStore::new(Table::new(data_dir.join(admins))),
            events: EventLog::new(Table::new(data_dir.join(attendance))),
        }
    }
}
