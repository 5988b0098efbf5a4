pub mod clear;
pub mod daily;
pub mod export;
pub mod init;
pub mod monthly;
pub mod show;

use crate::libs::config::Config;
use crate::libs::error::FuelError;
use crate::libs::messages::Message;
use crate::libs::time_span::parse_date_label;
use crate::msg_error_anyhow;
use crate::store::CsvStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Build the daily report from the trip log")]
    Daily(daily::DailyArgs),
    #[command(about = "Add a daily report to its monthly report", arg_required_else_help = true)]
    Monthly(monthly::MonthlyArgs),
    #[command(about = "Carry the last reading over and empty the trip log")]
    Clear(clear::ClearArgs),
    #[command(about = "Display a stored daily or monthly report")]
    Show(show::ShowArgs),
    #[command(about = "Export a stored report to CSV, JSON or Excel", arg_required_else_help = true)]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Daily(args) => daily::cmd(args),
            Commands::Monthly(args) => monthly::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// The record store named by the configuration.
pub(crate) fn open_store(config: &Config) -> CsvStore {
    CsvStore::new(config.store_or_default().data_dir)
}

/// Accepts `today`, `YYYY/MM/DD` or `YYYY-MM-DD`.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate> {
    if input.trim().eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    parse_date_label(input).ok_or_else(|| msg_error_anyhow!(Message::InvalidInput(input.to_string())))
}

/// Turns an engine error into the user-facing message for it.
pub fn engine_error(err: FuelError) -> anyhow::Error {
    let message = match err {
        FuelError::InvalidInitDate(date) => Message::InitRecordDateInvalid(date),
        FuelError::DateMismatch { init, first } => Message::DateMismatch { init, first },
        FuelError::NotADailyRecord(label) => Message::NotADailyReport(label),
        FuelError::InvalidFormat(text) => Message::TripTimeInvalid(text),
        other => return other.into(),
    };
    msg_error_anyhow!(message)
}
