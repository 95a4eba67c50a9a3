//! Chat transport boundary.
//!
//! The controller renders everything through [`ChatPort`]; the only real
//! implementation is the Telegram Bot API client in [`client`], tests plug
//! in a recording fake. All sends are fire-and-forget: transport failures
//! are logged at the boundary and never propagated into the core.

pub mod client;
pub mod types;

pub use client::TelegramApi;
pub use types::{CallbackQuery, Chat, Keyboard, KeyboardButton, Message, TgUser, Update};

use std::path::Path;

pub trait ChatPort: Send + Sync {
    fn send_text(&self, chat_id: i64, text: &str);

    fn send_html(&self, chat_id: i64, text: &str);

    fn send_keyboard(&self, chat_id: i64, text: &str, keyboard: &Keyboard);

    fn send_html_keyboard(&self, chat_id: i64, text: &str, keyboard: &Keyboard);

    fn answer_callback(&self, callback_id: &str, text: &str);

    fn delete_message(&self, chat_id: i64, message_id: i64);

    fn send_document(&self, chat_id: i64, path: &Path, filename: &str, caption: &str);
}
