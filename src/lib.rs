//! tabelbot library root.
//! Exposes the conversation controller, core logic and the run() entry point.

pub mod bot;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod telegram;
pub mod utils;

use crate::core::rights;
use crate::core::session::{DraftRights, Sessions};
use clap::Parser;
use cli::Cli;
use config::Config;
use errors::{AppError, AppResult};
use models::Right;
use store::Store;
use telegram::{ChatPort, TelegramApi};

use std::env;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Shared application state: configuration, the three flat tables, and the
/// transient per-person dialog state.
pub struct App {
    pub cfg: Config,
    pub store: Store,
    pub sessions: Sessions,
    pub drafts: DraftRights,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        let store = Store::open(
            &cfg.data_dir(),
            &cfg.users_file,
            &cfg.admins_file,
            &cfg.attendance_file,
        );
        Self {
            cfg,
            store,
            sessions: Sessions::default(),
            drafts: DraftRights::default(),
        }
    }

    pub fn is_registered(&self, person_id: i64) -> bool {
        rights::is_registered(&self.store, person_id)
    }

    pub fn is_root(&self, person_id: i64) -> bool {
        rights::is_root(self.cfg.root_admin_id, person_id)
    }

    pub fn is_admin(&self, person_id: i64) -> bool {
        rights::is_admin(&self.store, self.cfg.root_admin_id, person_id)
    }

    pub fn has_right(&self, person_id: i64, right: Right) -> bool {
        rights::has_right(&self.store, self.cfg.root_admin_id, person_id, right)
    }
}

/// Entry point used by main.rs: load config, check the credential, start the
/// two daily timers and run the long-poll loop forever.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load(cli.config.as_deref().map(Path::new));
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // the single fatal startup condition
    let token = env::var("TELEGRAM_TOKEN").map_err(|_| AppError::MissingToken)?;

    let app = Arc::new(App::new(cfg));
    let api = Arc::new(TelegramApi::new(&token)?);
    log::info!("tabelbot started, data dir: {}", app.cfg.data_dir);

    {
        let (app, api) = (Arc::clone(&app), Arc::clone(&api));
        scheduler::spawn_daily("reminder", app.cfg.reminder_time(), move || {
            bot::send_reminders(&app, api.as_ref());
        });
    }
    {
        let (app, api) = (Arc::clone(&app), Arc::clone(&api));
        scheduler::spawn_daily("report", app.cfg.report_time(), move || {
            bot::send_daily_report(&app, api.as_ref());
        });
    }

    let mut offset = 0i64;
    loop {
        let updates = match api.get_updates(offset) {
            Ok(updates) => updates,
            Err(e) => {
                log::warn!("getUpdates failed: {e}");
                thread::sleep(Duration::from_secs(5));
                continue;
            }
        };
        for update in updates {
            offset = offset.max(update.update_id + 1);
            if let Some(message) = &update.message
                && message.command().is_some()
            {
                bot::autodelete_later(
                    Arc::clone(&api) as Arc<dyn ChatPort>,
                    message.chat.id,
                    message.message_id,
                );
            }
            bot::Bot::new(api.as_ref(), &app).handle_update(&update);
        }
    }
}
