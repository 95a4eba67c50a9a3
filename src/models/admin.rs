use super::rights::RightSet;
use serde::Serialize;

/// A delegated administrator. The root administrator is a configured
/// constant and never appears in this table.
/// Backed by an `admins.csv` row: `id,name,f1,f2,f3,f4,f5`.
#[derive(Debug, Clone, Serialize)]
pub struct Admin {
    pub id: i64,
    pub name: String,
    pub rights: RightSet,
}

impl Admin {
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![self.id.to_string(), self.name.clone()];
        row.extend(self.rights.to_columns());
        row
    }

    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 2 {
            return None;
        }
        Some(Self {
            id: row[0].parse().ok()?,
            name: row[1].clone(),
            rights: RightSet::from_columns(&row[2..]),
        })
    }
}
