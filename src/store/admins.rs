use super::Table;
use crate::models::{Admin, RightSet};

pub struct AdminStore {
    table: Table,
}

impl AdminStore {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn all(&self) -> Vec<Admin> {
        self.table
            .read()
            .iter()
            .filter_map(|row| Admin::from_row(row))
            .collect()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.all().iter().any(|a| a.id == id)
    }

    /// Stored flags for `id`; an absent record reads as the empty set.
    pub fn rights(&self, id: i64) -> RightSet {
        self.all()
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.rights)
            .unwrap_or_default()
    }

    /// Write all five flags at once, update-or-append.
    pub fn save(&self, id: i64, name: &str, rights: RightSet) {
        let new_row = Admin {
            id,
            name: name.to_string(),
            rights,
        }
        .to_row();
        let id_str = id.to_string();
        self.table.update(move |rows| {
            for row in rows.iter_mut() {
                if row.first() == Some(&id_str) {
                    *row = new_row;
                    return;
                }
            }
            rows.push(new_row);
        });
    }
}
