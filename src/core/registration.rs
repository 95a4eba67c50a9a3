//! Name validation and profile saving.

use crate::store::Store;

/// A display name is `Фамилия И.О.`: exactly two whitespace-separated
/// tokens, the second exactly four characters — letter, period, letter,
/// period. Character-based, so Cyrillic initials validate.
pub fn is_valid_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() != 2 {
        return false;
    }
    let initials: Vec<char> = parts[1].chars().collect();
    initials.len() == 4
        && initials[0].is_alphabetic()
        && initials[1] == '.'
        && initials[2].is_alphabetic()
        && initials[3] == '.'
}

/// Persist a validated name, associating id, name and originating chat.
pub fn save_person(store: &Store, id: i64, name: &str, chat_id: i64) {
    store.people.save_name(id, name.trim(), chat_id);
}

#[cfg(test)]
mod tests {
    use super::is_valid_name;

    #[test]
    fn accepts_surname_with_initials() {
        assert!(is_valid_name("Иванов И.И."));
        assert!(is_valid_name("Smith J.R."));
        assert!(is_valid_name("  Иванов   И.И.  "));
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(!is_valid_name("Иванов"));
        assert!(!is_valid_name("Иванов Иван"));
        assert!(!is_valid_name("Иванов ИИ"));
        assert!(!is_valid_name("Иванов И.И"));
        assert!(!is_valid_name("Иванов Иван И.И."));
        assert!(!is_valid_name("Иванов .И.И"));
        assert!(!is_valid_name(""));
    }
}
