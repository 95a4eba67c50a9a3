//! Button-press dispatch. Opaque callback codes, some parameterized
//! (`personnel_<idx>`, `right_<code>_<id>`, `save_rights_<id>`), plus the
//! literal location captions. Lacking the required right is a silent no-op.

use super::{menus, texts, Bot};
use crate::core::attendance;
use crate::core::session::SessionState;
use crate::core::summary;
use crate::export::ReportRange;
use crate::models::Right;
use crate::telegram::CallbackQuery;

impl Bot<'_> {
    pub(super) fn handle_callback(&self, query: &CallbackQuery) {
        let Some(chat_id) = query.message.as_ref().map(|m| m.chat.id) else {
            return;
        };
        let Some(data) = query.data.as_deref() else { return };
        let user = &query.from;

        match data {
            "arrived" => self.on_arrived(query, chat_id),
            "left" => self.on_left(query, chat_id),
            "journal" => self.on_journal(query, chat_id),
            "admin_panel" => {
                if self.app.is_admin(user.id) {
                    self.api
                        .send_keyboard(chat_id, texts::ADMIN_PANEL_TITLE, &menus::admin_panel());
                    self.api.answer_callback(&query.id, "Открыта админ-панель");
                }
            }
            "summary" => {
                if self.app.has_right(user.id, Right::Summary) {
                    let text = summary::render(&summary::build(&self.app.store));
                    self.api.send_text(chat_id, &text);
                    self.api.answer_callback(&query.id, "Быстрая сводка");
                }
            }
            "personnel" | "add_admin" => {
                if self.app.has_right(user.id, Right::ManageUsers) {
                    self.show_personnel(chat_id, 0);
                }
            }
            "manage_admins" => {
                if self.app.has_right(user.id, Right::ManageUsers) {
                    self.show_admins(chat_id, 0);
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
            "danger" => {
                if self.app.has_right(user.id, Right::DangerZone) {
                    self.api
                        .send_keyboard(chat_id, texts::DANGER_TITLE, &menus::danger_menu());
                }
            }
            "confirm_clear" => {
                if self.app.has_right(user.id, Right::DangerZone) {
                    self.app.store.events.clear();
                    self.api.send_text(chat_id, texts::LOG_CLEARED);
                    self.api.answer_callback(&query.id, "");
                }
            }
            _ => self.handle_parameterized(query, chat_id, data),
        }
    }

    fn handle_parameterized(&self, query: &CallbackQuery, chat_id: i64, data: &str) {
        let user = &query.from;

        if let Some(code) = data.strip_prefix("export_") {
            if self.app.has_right(user.id, Right::Export)
                && let Some(range) = ReportRange::from_code(code)
            {
                self.send_report(chat_id, range);
            }
            return;
        }
        if let Some(idx) = data.strip_prefix("personnel_") {
            if self.app.has_right(user.id, Right::ManageUsers)
                && let Ok(idx) = idx.parse::<usize>()
            {
                self.show_personnel(chat_id, idx);
                self.api.answer_callback(&query.id, "");
            }
            return;
        }
        if let Some(idx) = data.strip_prefix("adminlist_") {
            if self.app.has_right(user.id, Right::ManageUsers)
                && let Ok(idx) = idx.parse::<usize>()
            {
                self.show_admins(chat_id, idx);
                self.api.answer_callback(&query.id, "");
            }
            return;
        }
        if let Some(idx) = data.strip_prefix("makeadmin_") {
            if self.app.has_right(user.id, Right::ManageUsers)
                && let Ok(idx) = idx.parse::<usize>()
            {
                self.open_rights_menu(chat_id, idx);
                self.api.answer_callback(&query.id, "");
            }
            return;
        }
        if let Some(rest) = data.strip_prefix("right_") {
            if self.app.has_right(user.id, Right::ManageUsers) {
                self.toggle_right(chat_id, rest);
                self.api.answer_callback(&query.id, "");
            }
            return;
        }
        if let Some(id) = data.strip_prefix("save_rights_") {
            if self.app.has_right(user.id, Right::ManageUsers)
                && let Ok(candidate) = id.parse::<i64>()
            {
                self.save_rights(chat_id, candidate);
            }
            return;
        }

        // location captions are their own callback payloads
        if texts::LEAVE_LOCATIONS.contains(&data) {
            self.on_location_chosen(query, chat_id, data);
        }
    }

    // ---------------------------
    // Attendance
    // ---------------------------

    fn on_arrived(&self, query: &CallbackQuery, chat_id: i64) {
        let user = &query.from;
        let name = self.display_name(user.id, Some(user));
        match attendance::mark_arrived(&self.app.store, user.id, &name) {
            Ok(event) => {
                self.notify_root(&event);
                self.api.send_text(chat_id, texts::ARRIVED_OK);
                self.send_main_menu(chat_id, user.id);
                self.api.answer_callback(&query.id, "Записано!");
            }
            Err(_) => {
                self.api.send_text(chat_id, texts::ALREADY_IN);
                self.api.answer_callback(&query.id, "Сначала отметь убытие");
            }
        }
    }

    fn on_left(&self, query: &CallbackQuery, chat_id: i64) {
        use crate::core::attendance::Presence;
        let user = &query.from;
        if attendance::presence(&self.app.store, user.id) == Presence::Out {
            self.api.send_text(chat_id, texts::ALREADY_OUT);
            self.api.answer_callback(&query.id, "Сначала отметь прибытие");
            return;
        }
        self.api
            .send_keyboard(chat_id, texts::CHOOSE_LOCATION, &menus::leave_menu());
        self.api.answer_callback(&query.id, "Выберите локацию");
    }

    fn on_location_chosen(&self, query: &CallbackQuery, chat_id: i64, location: &str) {
        let user = &query.from;
        if location == texts::OTHER_LOCATION {
            self.app.sessions.set(user.id, SessionState::AwaitingLocation);
            self.api.send_text(chat_id, texts::ASK_MANUAL_LOCATION);
            self.api.answer_callback(&query.id, "Жду текст");
            return;
        }
        let name = self.display_name(user.id, Some(user));
        match attendance::mark_departed(&self.app.store, user.id, &name, location) {
            Ok(event) => {
                self.notify_root(&event);
                self.api.send_text(chat_id, texts::DEPARTED_OK);
                self.send_main_menu(chat_id, user.id);
                self.api.answer_callback(&query.id, "Записано!");
            }
            Err(_) => {
                self.api.send_text(chat_id, texts::ALREADY_OUT);
                self.api.answer_callback(&query.id, "Сначала отметь прибытие");
            }
        }
    }

    fn on_journal(&self, query: &CallbackQuery, chat_id: i64) {
        let entries = self.app.store.events.recent_for(query.from.id, 3);
        if entries.is_empty() {
            self.api.send_text(chat_id, texts::JOURNAL_EMPTY);
        } else {
            let text: String = entries
                .iter()
                .map(|e| texts::journal_entry(e) + "\n")
                .collect();
            self.api.send_text(chat_id, &text);
        }
        self.api.answer_callback(&query.id, "Журнал");
    }

    // ---------------------------
    // Personnel browsing / rights assignment
    // ---------------------------

    fn show_personnel(&self, chat_id: i64, idx: usize) {
        let people = self.app.store.people.all_sorted();
        match menus::personnel_card(&people, idx, self.app.cfg.root_admin_id) {
            Some((text, keyboard)) => self.api.send_html_keyboard(chat_id, &text, &keyboard),
            None => self.api.send_text(chat_id, texts::NO_PERSONNEL),
        }
    }

    fn show_admins(&self, chat_id: i64, idx: usize) {
        let admins = self.app.store.admins.all();
        match menus::admin_card(&admins, idx) {
            Some((text, keyboard)) => self.api.send_html_keyboard(chat_id, &text, &keyboard),
            None => self.api.send_text(chat_id, texts::NO_ADMINS),
        }
    }

    /// Open the checkbox menu for the person at `idx`, seeding the draft
    /// selection from the persisted flags.
    fn open_rights_menu(&self, chat_id: i64, idx: usize) {
        let people = self.app.store.people.all_sorted();
        let Some(person) = people.get(idx) else { return };
        if person.id == self.app.cfg.root_admin_id {
            return;
        }
        let current = self
            .app
            .drafts
            .begin(person.id, self.app.store.admins.rights(person.id));
        self.api.send_keyboard(
            chat_id,
            texts::RIGHTS_MENU_TITLE,
            &menus::rights_menu(person.id, &current),
        );
    }

    /// `right_<code>_<id>`: toggle the draft flag and re-render.
    fn toggle_right(&self, chat_id: i64, payload: &str) {
        let Some((code, id)) = payload.rsplit_once('_') else { return };
        let Ok(candidate) = id.parse::<i64>() else { return };
        let Some(right) = Right::from_code(code) else { return };
        let seed = self.app.store.admins.rights(candidate);
        let selected = self.app.drafts.toggle(candidate, right, seed);
        self.api.send_keyboard(
            chat_id,
            texts::RIGHTS_MENU_TITLE,
            &menus::rights_menu(candidate, &selected),
        );
    }

    /// Persist the draft (or the stored flags when nothing was toggled),
    /// update-or-append the admin record.
    fn save_rights(&self, chat_id: i64, candidate: i64) {
        let rights = self
            .app
            .drafts
            .take(candidate)
            .unwrap_or_else(|| self.app.store.admins.rights(candidate));
        let name = self.display_name(candidate, None);
        self.app.store.admins.save(candidate, &name, rights);
        self.api.send_text(chat_id, &texts::rights_saved(&name));
    }
}
