//! Unified application error type.
//! The fallible seams (transport, export, startup) return AppError; storage
//! deliberately does not — table failures degrade in place and are logged.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Transport
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error: {0}")]
    Telegram(String),

    // ---------------------------
    // Startup
    // ---------------------------
    #[error("TELEGRAM_TOKEN environment variable is not set")]
    MissingToken,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No rows match the selected report range")]
    ExportEmpty,

    #[error("Report too large: more than {0} rows")]
    ExportTooLarge(usize),
}

pub type AppResult<T> = Result<T, AppError>;
