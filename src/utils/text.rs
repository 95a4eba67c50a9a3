//! Text utilities shared by menus, summaries and the exporter.

/// Strip decorative symbols (emoji, pictographs, enclosed marks) from a
/// location caption and trim the result. Menu captions carry emoji prefixes
/// that must not leak into summaries or spreadsheet cells.
pub fn clean_location(loc: &str) -> String {
    loc.chars()
        .filter(|c| !is_decorative(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_decorative(c: char) -> bool {
    matches!(c as u32,
        0x2190..=0x21FF      // arrows
        | 0x2600..=0x27BF    // misc symbols, dingbats
        | 0x2B00..=0x2BFF    // misc symbols and arrows
        | 0xFE0F             // variation selector-16
        | 0x1F100..=0x1F1FF  // enclosed alphanumerics, flags
        | 0x1F300..=0x1F5FF  // misc symbols and pictographs
        | 0x1F600..=0x1F64F  // emoticons
        | 0x1F680..=0x1F6FF  // transport
        | 0x1F900..=0x1F9FF  // supplemental symbols
        | 0x1FA00..=0x1FAFF) // extended pictographs
}

/// Uppercase the first character of a display name, leaving the rest as-is.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
