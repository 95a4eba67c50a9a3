#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;
use tabelbot::config::Config;
use tabelbot::telegram::{CallbackQuery, Chat, ChatPort, Keyboard, Message, TgUser, Update};
use tabelbot::App;
use tempfile::TempDir;

pub const ROOT_ID: i64 = 42;

/// Fresh app over an isolated temp data directory.
pub fn test_app() -> (TempDir, App) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let cfg = Config {
        data_dir: dir.path().to_string_lossy().to_string(),
        root_admin_id: ROOT_ID,
        ..Config::default()
    };
    (dir, App::new(cfg))
}

pub fn register(app: &App, id: i64, name: &str) {
    app.store.people.save_name(id, name, id);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Html { chat_id: i64, text: String },
    Keyboard { chat_id: i64, text: String, keyboard: Keyboard },
    HtmlKeyboard { chat_id: i64, text: String, keyboard: Keyboard },
    CallbackAnswer { id: String, text: String },
    Deleted { chat_id: i64, message_id: i64 },
    Document { chat_id: i64, filename: String },
}

/// Recording fake of the chat transport.
#[derive(Default)]
pub struct RecordingChat {
    pub sent: Mutex<Vec<Sent>>,
}

impl RecordingChat {
    pub fn outbox(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Plain and keyboard-message texts delivered to one chat.
    pub fn texts_for(&self, chat: i64) -> Vec<String> {
        self.outbox()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { chat_id, text }
                | Sent::Html { chat_id, text }
                | Sent::Keyboard { chat_id, text, .. }
                | Sent::HtmlKeyboard { chat_id, text, .. }
                    if chat_id == chat =>
                {
                    Some(text)
                }
                _ => None,
            })
            .collect()
    }
}

impl ChatPort for RecordingChat {
    fn send_text(&self, chat_id: i64, text: &str) {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id,
            text: text.to_string(),
        });
    }

    fn send_html(&self, chat_id: i64, text: &str) {
        self.sent.lock().unwrap().push(Sent::Html {
            chat_id,
            text: text.to_string(),
        });
    }

    fn send_keyboard(&self, chat_id: i64, text: &str, keyboard: &Keyboard) {
        self.sent.lock().unwrap().push(Sent::Keyboard {
            chat_id,
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
    }

    fn send_html_keyboard(&self, chat_id: i64, text: &str, keyboard: &Keyboard) {
        self.sent.lock().unwrap().push(Sent::HtmlKeyboard {
            chat_id,
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
    }

    fn answer_callback(&self, callback_id: &str, text: &str) {
        self.sent.lock().unwrap().push(Sent::CallbackAnswer {
            id: callback_id.to_string(),
            text: text.to_string(),
        });
    }

    fn delete_message(&self, chat_id: i64, message_id: i64) {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Deleted { chat_id, message_id });
    }

    fn send_document(&self, chat_id: i64, _path: &Path, filename: &str, _caption: &str) {
        self.sent.lock().unwrap().push(Sent::Document {
            chat_id,
            filename: filename.to_string(),
        });
    }
}

pub fn tg_user(id: i64) -> TgUser {
    TgUser {
        id,
        first_name: "Иван".to_string(),
        last_name: Some("Иванов".to_string()),
        username: Some("ivanov".to_string()),
    }
}

pub fn message_update(user_id: i64, chat_id: i64, text: &str) -> Update {
    Update {
        update_id: 1,
        message: Some(Message {
            message_id: 100,
            from: Some(tg_user(user_id)),
            chat: Chat { id: chat_id },
            text: Some(text.to_string()),
        }),
        callback_query: None,
    }
}

pub fn callback_update(user_id: i64, chat_id: i64, data: &str) -> Update {
    Update {
        update_id: 1,
        message: None,
        callback_query: Some(CallbackQuery {
            id: "cbq".to_string(),
            from: tg_user(user_id),
            message: Some(Message {
                message_id: 100,
                from: None,
                chat: Chat { id: chat_id },
                text: None,
            }),
            data: Some(data.to_string()),
        }),
    }
}
