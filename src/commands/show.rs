//! Displays stored reports without changing them.

use super::{open_store, parse_date_arg};
use crate::{
    libs::{config::Config, messages::Message, monthly::MonthKey, time_span::date_label, view::View},
    msg_info, msg_print,
    store::RecordSource,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// `today`, `YYYY/MM/DD` or `YYYY-MM-DD`
    #[arg(default_value = "today")]
    date: String,

    /// Show the month the date falls in instead of the day
    #[arg(short, long)]
    month: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let config = Config::read()?;
    let report_config = config.report_or_default();
    let store = open_store(&config);
    let date = parse_date_arg(&args.date)?;

    if args.month {
        let key = MonthKey::of(date);
        let rows = store.monthly_rows(key)?;
        if rows.is_empty() {
            msg_info!(Message::MonthlyReportNotFound(key.to_string()));
            return Ok(());
        }
        msg_print!(Message::MonthlyReportHeader(key.to_string()), true);
        return View::monthly(&rows, &report_config.currency);
    }

    match store.daily_report_rows(date)? {
        Some(rows) => {
            msg_print!(Message::DailyReportHeader(date_label(date)), true);
            View::stored_daily(&rows, &report_config.idling_marker, &report_config.currency)
        }
        None => {
            msg_info!(Message::DailyReportNotFound(date_label(date)));
            Ok(())
        }
    }
}
