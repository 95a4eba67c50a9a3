//! Minimal blocking Telegram Bot API client: long-polling `getUpdates` plus
//! the handful of send methods the controller needs. No retry logic; a
//! failed send is logged and dropped.

use super::types::{Keyboard, Update};
use super::ChatPort;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;

/// Long-poll timeout passed to `getUpdates`.
const POLL_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}

pub struct TelegramApi {
    http: Client,
    base: String,
}

impl TelegramApi {
    pub fn new(token: &str) -> AppResult<Self> {
        let http = Client::builder()
            // must outlive the long-poll timeout
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 15))
            .build()?;
        Ok(Self {
            http,
            base: format!("https://api.telegram.org/bot{token}"),
        })
    }

    pub fn get_updates(&self, offset: i64) -> AppResult<Vec<Update>> {
        let body = json!({
            "offset": offset,
            "timeout": POLL_TIMEOUT_SECS,
            "allowed_updates": ["message", "callback_query"],
        });
        let resp: ApiResponse<Vec<Update>> = self
            .http
            .post(format!("{}/getUpdates", self.base))
            .json(&body)
            .send()?
            .json()?;
        if !resp.ok {
            return Err(AppError::Telegram(
                resp.description.unwrap_or_else(|| "getUpdates failed".into()),
            ));
        }
        Ok(resp.result.unwrap_or_default())
    }

    fn call(&self, method: &str, body: Value) {
        let result = self
            .http
            .post(format!("{}/{method}", self.base))
            .json(&body)
            .send()
            .and_then(|r| r.json::<ApiResponse<Value>>());
        match result {
            Ok(resp) if !resp.ok => {
                log::warn!(
                    "{method} rejected: {}",
                    resp.description.unwrap_or_else(|| "no description".into())
                );
            }
            Ok(_) => {}
            Err(e) => log::warn!("{method} failed: {e}"),
        }
    }

    fn send_message(&self, chat_id: i64, text: &str, html: bool, keyboard: Option<&Keyboard>) {
        let mut body = json!({ "chat_id": chat_id, "text": text });
        if html {
            body["parse_mode"] = json!("HTML");
        }
        if let Some(kb) = keyboard {
            match serde_json::to_value(kb) {
                Ok(markup) => body["reply_markup"] = markup,
                Err(e) => log::warn!("keyboard serialization failed: {e}"),
            }
        }
        self.call("sendMessage", body);
    }
}

impl ChatPort for TelegramApi {
    fn send_text(&self, chat_id: i64, text: &str) {
        self.send_message(chat_id, text, false, None);
    }

    fn send_html(&self, chat_id: i64, text: &str) {
        self.send_message(chat_id, text, true, None);
    }

    fn send_keyboard(&self, chat_id: i64, text: &str, keyboard: &Keyboard) {
        self.send_message(chat_id, text, false, Some(keyboard));
    }

    fn send_html_keyboard(&self, chat_id: i64, text: &str, keyboard: &Keyboard) {
        self.send_message(chat_id, text, true, Some(keyboard));
    }

    fn answer_callback(&self, callback_id: &str, text: &str) {
        self.call(
            "answerCallbackQuery",
            json!({ "callback_query_id": callback_id, "text": text }),
        );
    }

    fn delete_message(&self, chat_id: i64, message_id: i64) {
        self.call(
            "deleteMessage",
            json!({ "chat_id": chat_id, "message_id": message_id }),
        );
    }

    fn send_document(&self, chat_id: i64, path: &Path, filename: &str, caption: &str) {
        let part = match multipart::Part::file(path) {
            Ok(p) => p.file_name(filename.to_string()),
            Err(e) => {
                log::warn!("cannot open document {}: {e}", path.display());
                return;
            }
        };
        let form = multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("document", part);
        let result = self
            .http
            .post(format!("{}/sendDocument", self.base))
            .multipart(form)
            .send();
        if let Err(e) = result {
            log::warn!("sendDocument failed: {e}");
        }
    }
}
