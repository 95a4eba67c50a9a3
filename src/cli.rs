use clap::Parser;

/// Command-line interface definition for tabelbot
#[derive(Parser)]
#[command(
    name = "tabelbot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracking Telegram bot: arrival/departure marks, daily summaries and XLSX reports",
    long_about = None
)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Override the data directory holding the CSV tables
    #[arg(long = "data-dir")]
    pub data_dir: Option<String>,
}
