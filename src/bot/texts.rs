//! User-facing strings. The product speaks Russian; everything the bot can
//! say lives here so the controller stays free of literals.

use crate::models::AttendanceEvent;
use crate::models::Action;
use crate::utils::{clean_location, split_date_time};

/// Fixed departure-location menu. The last entry is the free-text catch-all.
pub const LEAVE_LOCATIONS: [&str; 11] = [
    "🏥 Поликлиника",
    "⚓️ ОБРМП",
    "🌆 Калининград",
    "🛒 Магазин",
    "🍲 Столовая",
    "🏨 Госпиталь",
    "⚙️ Хоз. Работы",
    "🩺 ВВК",
    "🏛 МФЦ",
    "🚓 Патруль",
    "📝 Другое",
];

pub const OTHER_LOCATION: &str = "📝 Другое";

/// Evening reminder pool; one is drawn uniformly per absent person.
pub const REMINDER_TEXTS: [&str; 8] = [
    "🦉 Не забудь вернуться в часть! Солдат всегда возвращается домой.",
    "🌚 Уже вечер — пора бы прибыть!",
    "🚨 Командир волнуется — отметь прибытие!",
    "🐻 Пора домой, жду тебя!",
    "😜 Твои друзья уже здесь, а ты?",
    "🎯 Не пропусти отметку 'Прибыл', а то придется угощать всех чаем!",
    "🥟 Ужин стынет — прибудь, пока горячо!",
    "📢 Объявление: пора отмечать прибытие!",
];

pub const ASK_NAME: &str =
    "✍️ Введите своё ФИО в формате: Фамилия И.О. (например: Иванов И.И.)";
pub const BAD_NAME: &str = "❗ Формат неверный. Введите ФИО так: Иванов И.И.";
pub const SETNAME_USAGE: &str =
    "✏️ Введите: /setname Фамилия И.О. (например: Иванов И.И.)";
pub const NAME_SAVED: &str = "✅ ФИО сохранено!";
pub const NAME_UPDATED: &str = "✅ ФИО обновлено!";

pub const MAIN_MENU_TITLE: &str = "Главное меню";
pub const ADMIN_PANEL_TITLE: &str = "⚙️ Админ-панель:";
pub const CHOOSE_LOCATION: &str = "Выберите локацию, куда убыл:";
pub const ASK_MANUAL_LOCATION: &str = "Введите вручную, куда выбываете:";
pub const BAD_MANUAL_LOCATION: &str = "❗ Введите корректную локацию (не менее 3 символов).";
pub const CHOOSE_EXPORT_PERIOD: &str = "Выберите период для экспорта:";
pub const RIGHTS_MENU_TITLE: &str = "Выберите права для админа:";
pub const DANGER_TITLE: &str = "⚠️ Опасная зона: очистить журнал посещений?";

pub const ARRIVED_OK: &str = "✅ Прибытие отмечено!";
pub const DEPARTED_OK: &str = "✅ Убытие отмечено!";
pub const ALREADY_IN: &str = "⚠️ Ты ещё не отмечал убытие — всё ок?";
pub const ALREADY_OUT: &str = "🔴 Ты уже отмечал убытие. Сначала отметь прибытие!";

pub const JOURNAL_EMPTY: &str = "Записей не найдено.";
pub const NO_PERSONNEL: &str = "Нет данных о личном составе.";
pub const NO_ADMINS: &str = "Нет других админов.";
pub const USERS_EMPTY: &str = "Нет данных о сотрудниках.";
pub const LOG_CLEARED: &str = "🗑️ Журнал посещений очищен";
pub const EXPORT_EMPTY: &str = "Нет данных по выбранному фильтру.";
pub const EXPORT_FAILED: &str = "Ошибка создания Excel файла";
pub const REPORT_FILENAME: &str = "Отчёт_Табель.xlsx";
pub const REPORT_CAPTION: &str = "📊 Отчёт по табелю";
pub const UNKNOWN_NAME: &str = "Неизвестно";

pub fn export_too_large(limit: usize) -> String {
    format!("Слишком большой экспорт! (>{limit} записей)")
}

pub fn rights_saved(name: &str) -> String {
    format!("✅ Права сохранены для {name}")
}

pub fn user_list(lines: &[String]) -> String {
    if lines.is_empty() {
        return format!("👥 Список сотрудников:\n{USERS_EMPTY}");
    }
    format!("👥 Список сотрудников:\n{}", lines.join("\n"))
}

/// Card sent to the root administrator on every successful mark.
pub fn mark_notification(event: &AttendanceEvent) -> String {
    let location = match event.action {
        Action::Arrived => "-".to_string(),
        Action::Departed => clean_location(&event.location),
    };
    format!(
        "📋 <b>Новая отметка</b>\n\
         👤 <b>ФИО:</b> {}\n\
         🆔 <b>ID:</b> {}\n\
         ⏰ <b>Время:</b> {}\n\
         ⚡ <b>Действие:</b> {} {}\n\
         📍 Локация: {}",
        event.name,
        event.person_id,
        event.timestamp_str(),
        event.action.emoji(),
        event.action.as_str(),
        location,
    )
}

/// One personal-journal entry.
pub fn journal_entry(event: &AttendanceEvent) -> String {
    let (date, time) = split_date_time(&event.timestamp_str());
    format!(
        "{} {} {}\n{} | {} | {}\n",
        event.action.emoji(),
        event.action.as_str(),
        event.location,
        date,
        time,
        event.name,
    )
}
