use super::Table;
use crate::models::Person;
use crate::utils::capitalize;

pub struct PeopleStore {
    table: Table,
}

impl PeopleStore {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Every registered person, capitalized and sorted by display name —
    /// the order the personnel browser and the summary use.
    pub fn all_sorted(&self) -> Vec<Person> {
        let mut people: Vec<Person> = self
            .table
            .read()
            .iter()
            .filter_map(|row| Person::from_row(row))
            .map(|mut p| {
                p.name = capitalize(&p.name);
                p
            })
            .collect();
        people.sort_by(|a, b| a.name.cmp(&b.name));
        people
    }

    pub fn get(&self, id: i64) -> Option<Person> {
        self.table
            .read()
            .iter()
            .filter_map(|row| Person::from_row(row))
            .find(|p| p.id == id)
    }

    pub fn is_registered(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Update the record matched by id, or append a new one. People are
    /// never deleted.
    pub fn save_name(&self, id: i64, name: &str, chat_id: i64) {
        let id_str = id.to_string();
        let name = name.to_string();
        self.table.update(move |rows| {
            for row in rows.iter_mut() {
                if row.first() == Some(&id_str) {
                    if row.len() > 1 {
                        row[1] = name;
                    }
                    return;
                }
            }
            rows.push(vec![id_str, name, chat_id.to_string()]);
        });
    }
}
