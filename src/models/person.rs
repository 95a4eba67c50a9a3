use serde::Serialize;

/// One registered member of the unit.
/// Backed by a `users.csv` row: `id,name,chat_id`.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub chat_id: i64,
}

impl Person {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.chat_id.to_string(),
        ]
    }

    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 3 {
            return None;
        }
        Some(Self {
            id: row[0].parse().ok()?,
            name: row[1].clone(),
            chat_id: row[2].parse().ok()?,
        })
    }
}
