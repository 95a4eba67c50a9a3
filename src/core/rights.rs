//! Identity and rights resolution.
//!
//! Every check re-reads the current table snapshot; the tables are small and
//! consistency matters more than caching. The root administrator is a
//! configured constant outside the admins table and short-circuits every
//! check true. No function here has side effects.

use crate::models::Right;
use crate::store::Store;

pub fn is_registered(store: &Store, person_id: i64) -> bool {
    store.people.is_registered(person_id)
}

pub fn is_root(root_id: i64, person_id: i64) -> bool {
    person_id == root_id
}

pub fn is_admin(store: &Store, root_id: i64, person_id: i64) -> bool {
    is_root(root_id, person_id) || store.admins.contains(person_id)
}

pub fn has_right(store: &Store, root_id: i64, person_id: i64, right: Right) -> bool {
    is_root(root_id, person_id) || store.admins.rights(person_id).has(right)
}
