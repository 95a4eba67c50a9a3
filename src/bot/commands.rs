//! Slash-command handling and free-text interpretation per session state.

use super::{menus, texts, Bot};
use crate::core::attendance;
use crate::core::registration;
use crate::core::session::SessionState;
use crate::models::Right;
use crate::telegram::Message;

impl Bot<'_> {
    pub(super) fn handle_command(&self, message: &Message) {
        let Some(user) = &message.from else { return };
        let Some((command, args)) = message.command() else { return };
        let chat_id = message.chat.id;

        // registration gate: nothing but name entry until a name is on file
        if !self.app.is_registered(user.id) {
            self.app.sessions.set(user.id, SessionState::AwaitingName);
            self.api.send_text(chat_id, texts::ASK_NAME);
            return;
        }

        match command.as_str() {
            "start" => self.send_main_menu(chat_id, user.id),
            "setname" => {
                if args.is_empty() || !registration::is_valid_name(&args) {
                    self.api.send_text(chat_id, texts::SETNAME_USAGE);
                    return;
                }
                registration::save_person(&self.app.store, user.id, &args, chat_id);
                self.api.send_text(chat_id, texts::NAME_UPDATED);
                self.send_main_menu(chat_id, user.id);
            }
            "admin" => {
                if self.app.has_right(user.id, Right::Settings) {
                    self.api
                        .send_keyboard(chat_id, texts::ADMIN_PANEL_TITLE, &menus::admin_panel());
                }
            }
            "report" => {
                if self.app.has_right(user.id, Right::Export) {
                    self.api.send_keyboard(
                        chat_id,
                        texts::CHOOSE_EXPORT_PERIOD,
                        &menus::report_filter_menu(),
                    );
                }
            }
            "clear" => {
                if self.app.has_right(user.id, Right::DangerZone) {
                    self.app.store.events.clear();
                    self.api.send_text(chat_id, texts::LOG_CLEARED);
                }
            }
            "list" => {
                if self.app.has_right(user.id, Right::ManageUsers) {
                    let lines: Vec<String> = self
                        .app
                        .store
                        .people
                        .all_sorted()
                        .iter()
                        .map(|p| format!("— {} ({})", p.name, p.id))
                        .collect();
                    self.api.send_text(chat_id, &texts::user_list(&lines));
                }
            }
            _ => {}
        }
    }

    pub(super) fn handle_message(&self, message: &Message) {
        let Some(user) = &message.from else { return };
        let Some(text) = message.text.as_deref() else { return };
        let chat_id = message.chat.id;

        match self.app.sessions.get(user.id) {
            SessionState::AwaitingName => {
                let name = text.trim();
                if registration::is_valid_name(name) {
                    registration::save_person(&self.app.store, user.id, name, chat_id);
                    self.app.sessions.clear(user.id);
                    self.api.send_text(chat_id, texts::NAME_SAVED);
                    self.send_main_menu(chat_id, user.id);
                } else {
                    // flag stays set until a valid name arrives
                    self.api.send_text(chat_id, texts::BAD_NAME);
                }
            }
            SessionState::AwaitingLocation => {
                let location = text.trim();
                if !attendance::is_valid_free_location(location) {
                    self.api.send_text(chat_id, texts::BAD_MANUAL_LOCATION);
                    return;
                }
                let name = self.display_name(user.id, Some(user));
                match attendance::mark_departed(&self.app.store, user.id, &name, location) {
                    Ok(event) => {
                        self.app.sessions.clear(user.id);
                        self.notify_root(&event);
                        self.api.send_text(chat_id, texts::DEPARTED_OK);
                        self.send_main_menu(chat_id, user.id);
                    }
                    Err(_) => {
                        self.app.sessions.clear(user.id);
                        self.api.send_text(chat_id, texts::ALREADY_OUT);
                    }
                }
            }
            SessionState::Idle => {
                // an unregistered first message opens the registration gate
                if !self.app.is_registered(user.id) {
                    self.app.sessions.set(user.id, SessionState::AwaitingName);
                    self.api.send_text(chat_id, texts::ASK_NAME);
                }
            }
        }
    }
}
