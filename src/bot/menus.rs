//! Inline keyboards and the paginated card views.

use super::texts;
use crate::models::{Admin, Person, Right, RightSet};
use crate::telegram::{Keyboard, KeyboardButton};

pub fn main_menu(is_admin: bool) -> Keyboard {
    let mut row = vec![
        KeyboardButton::new("🟢 Прибыл", "arrived"),
        KeyboardButton::new("🔴 Убыл", "left"),
        KeyboardButton::new("📖 Журнал", "journal"),
    ];
    if is_admin {
        row.push(KeyboardButton::new("⚙️ Админ-панель", "admin_panel"));
    }
    Keyboard::default().row(row)
}

pub fn admin_panel() -> Keyboard {
    Keyboard::default()
        .row(vec![
            KeyboardButton::new("📊 Быстрая сводка", "summary"),
            KeyboardButton::new("👥 Личный состав", "personnel"),
        ])
        .row(vec![
            KeyboardButton::new("📥 Экспорт", "report"),
            KeyboardButton::new("👑 Управление админами", "manage_admins"),
        ])
        .row(vec![KeyboardButton::new("⚠️ Опасная зона", "danger")])
}

pub fn report_filter_menu() -> Keyboard {
    Keyboard::default()
        .row(vec![
            KeyboardButton::new("📅 Сегодня", "export_today"),
            KeyboardButton::new("📆 Вчера", "export_yesterday"),
        ])
        .row(vec![
            KeyboardButton::new("🗓️ 7 дней", "export_7days"),
            KeyboardButton::new("🗓️ 30 дней", "export_30days"),
        ])
}

/// Two captions per row; the caption itself is the callback payload.
pub fn leave_menu() -> Keyboard {
    let mut keyboard = Keyboard::default();
    for pair in texts::LEAVE_LOCATIONS.chunks(2) {
        keyboard = keyboard.row(
            pair.iter()
                .map(|loc| KeyboardButton::new(*loc, *loc))
                .collect(),
        );
    }
    keyboard
}

pub fn danger_menu() -> Keyboard {
    Keyboard::default().row(vec![
        KeyboardButton::new("🗑️ Да, очистить", "confirm_clear"),
        KeyboardButton::new("◀️ Отмена", "admin_panel"),
    ])
}

/// Checkbox menu over the in-progress selection; one toggle button per
/// catalog entry plus the explicit save.
pub fn rights_menu(candidate: i64, selected: &RightSet) -> Keyboard {
    let mut keyboard = Keyboard::default();
    for right in Right::ALL {
        let check = if selected.has(right) { "✅" } else { "⬜️" };
        keyboard = keyboard.row(vec![KeyboardButton::new(
            format!("{check} {}", right.label()),
            format!("right_{}_{candidate}", right.code()),
        )]);
    }
    keyboard.row(vec![KeyboardButton::new(
        "💾 Сохранить",
        format!("save_rights_{candidate}"),
    )])
}

/// One-person card of the personnel browser. Prev/next are suppressed at the
/// range ends; the root administrator never gets a promote button.
pub fn personnel_card(
    people: &[Person],
    idx: usize,
    root_id: i64,
) -> Option<(String, Keyboard)> {
    if people.is_empty() {
        return None;
    }
    let idx = idx.min(people.len() - 1);
    let person = &people[idx];
    let text = format!(
        "👤 <b>{}</b>\n🆔 <a href=\"tg://user?id={}\">{}</a>",
        person.name, person.id, person.id
    );
    let mut row = Vec::new();
    if idx > 0 {
        row.push(KeyboardButton::new("◀️ Назад", format!("personnel_{}", idx - 1)));
    }
    if idx < people.len() - 1 {
        row.push(KeyboardButton::new("Вперёд ▶️", format!("personnel_{}", idx + 1)));
    }
    if person.id != root_id {
        row.push(KeyboardButton::new(
            "👑 Назначить админом",
            format!("makeadmin_{idx}"),
        ));
    }
    Some((text, Keyboard::default().row(row)))
}

/// One-admin card with the stored flag states.
pub fn admin_card(admins: &[Admin], idx: usize) -> Option<(String, Keyboard)> {
    if admins.is_empty() {
        return None;
    }
    let idx = idx.min(admins.len() - 1);
    let admin = &admins[idx];
    let mut text = format!(
        "👑 <b>{}</b>\n🆔 <a href=\"tg://user?id={}\">{}</a>\nПрава:",
        admin.name, admin.id, admin.id
    );
    for right in Right::ALL {
        let check = if admin.rights.has(right) { "✅" } else { "⬜️" };
        text.push_str(&format!("\n{check} {}", right.label()));
    }
    let mut row = Vec::new();
    if idx > 0 {
        row.push(KeyboardButton::new("◀️ Назад", format!("adminlist_{}", idx - 1)));
    }
    if idx < admins.len() - 1 {
        row.push(KeyboardButton::new("Вперёд ▶️", format!("adminlist_{}", idx + 1)));
    }
    Some((text, Keyboard::default().row(row)))
}
