//! Conversation controller: interprets commands, free text and callback
//! presses, drives the core, renders menus through the transport seam.

pub mod callbacks;
pub mod commands;
pub mod menus;
pub mod texts;

use crate::core::summary;
use crate::core::attendance::{self, Presence};
use crate::export::{self, ReportRange};
use crate::models::AttendanceEvent;
use crate::telegram::{ChatPort, TgUser, Update};
use crate::utils::capitalize;
use crate::App;
use chrono::Local;
use rand::prelude::*;
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Inbound command messages are removed from the chat after this delay.
pub const COMMAND_TTL: Duration = Duration::from_secs(60);

pub struct Bot<'a> {
    api: &'a dyn ChatPort,
    app: &'a App,
}

impl<'a> Bot<'a> {
    pub fn new(api: &'a dyn ChatPort, app: &'a App) -> Self {
        Self { api, app }
    }

    pub fn handle_update(&self, update: &Update) {
        if let Some(message) = &update.message {
            if message.command().is_some() {
                self.handle_command(message);
            } else {
                self.handle_message(message);
            }
        }
        if let Some(query) = &update.callback_query {
            self.handle_callback(query);
        }
    }

    /// Registered display name, or a best-effort fallback built from the
    /// chat profile for people who have not finished registration.
    fn display_name(&self, person_id: i64, profile: Option<&TgUser>) -> String {
        if let Some(person) = self.app.store.people.get(person_id) {
            return capitalize(&person.name);
        }
        match profile {
            Some(u) => {
                let surname = u.last_name.clone().unwrap_or_else(|| u.first_name.clone());
                let first = u.first_name.chars().next().unwrap_or('?');
                let second = u
                    .username
                    .as_deref()
                    .and_then(|n| n.chars().next())
                    .unwrap_or(first);
                format!("{surname} {first}.{second}.")
            }
            None => texts::UNKNOWN_NAME.to_string(),
        }
    }

    fn send_main_menu(&self, chat_id: i64, person_id: i64) {
        let is_admin = self.app.is_admin(person_id);
        self.api
            .send_keyboard(chat_id, texts::MAIN_MENU_TITLE, &menus::main_menu(is_admin));
    }

    /// Tell the root administrator about a successful mark, synchronously.
    fn notify_root(&self, event: &AttendanceEvent) {
        self.api
            .send_html(self.app.cfg.root_admin_id, &texts::mark_notification(event));
    }

    /// Full export flow: filter, cap-check, render, deliver, delete.
    fn send_report(&self, chat_id: i64, range: ReportRange) {
        use crate::errors::AppError;

        let events = self.app.store.events.all();
        let rows = match export::select_rows(&events, range, Local::now().naive_local()) {
            Ok(rows) => rows,
            Err(AppError::ExportEmpty) => {
                self.api.send_text(chat_id, texts::EXPORT_EMPTY);
                return;
            }
            Err(AppError::ExportTooLarge(limit)) => {
                self.api.send_text(chat_id, &texts::export_too_large(limit));
                return;
            }
            Err(e) => {
                log::warn!("report selection failed: {e}");
                return;
            }
        };

        let path = self
            .app
            .cfg
            .data_dir()
            .join(format!("report_{}.xlsx", Local::now().timestamp()));
        match export::xlsx::write_report(&rows, &path) {
            Ok(()) => {
                self.api
                    .send_document(chat_id, &path, texts::REPORT_FILENAME, texts::REPORT_CAPTION);
                if let Err(e) = fs::remove_file(&path) {
                    log::warn!("cannot remove {}: {e}", path.display());
                }
            }
            Err(e) => {
                log::warn!("report rendering failed: {e}");
                self.api.send_text(chat_id, texts::EXPORT_FAILED);
            }
        }
    }
}

/// 18:30 sweep: one uniformly random reminder per registered person who is
/// currently out. Repeats across days are fine.
pub fn send_reminders(app: &App, api: &dyn ChatPort) {
    let mut rng = rand::rng();
    for person in app.store.people.all_sorted() {
        if attendance::presence(&app.store, person.id) == Presence::Out
            && let Some(text) = texts::REMINDER_TEXTS.choose(&mut rng)
        {
            api.send_text(person.chat_id, text);
        }
    }
}

/// 19:00 report: the interactive summary, delivered to the root administrator.
pub fn send_daily_report(app: &App, api: &dyn ChatPort) {
    let text = summary::render(&summary::build(&app.store));
    api.send_text(app.cfg.root_admin_id, &text);
}

/// Detached task deleting a command message after [`COMMAND_TTL`].
pub fn autodelete_later(api: Arc<dyn ChatPort>, chat_id: i64, message_id: i64) {
    thread::spawn(move || {
        thread::sleep(COMMAND_TTL);
        api.delete_message(chat_id, message_id);
    });
}
