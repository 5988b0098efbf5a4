//! Export command for stored daily and monthly reports.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: the rows as stored, for spreadsheet applications
//! - **JSON**: structured data, with the daily totals recovered from the summary rows
//! - **Excel**: formatted workbook with units, highlighted idling and over-budget values

use super::{open_store, parse_date_arg};
use crate::{
    libs::{
        config::{Config, ReportConfig},
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        monthly::MonthKey,
        time_span::date_label,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_success,
    store::RecordSource,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Which report to export
    #[arg(value_enum)]
    data: ExportData,

    /// Day of the report, or any day of the month: `today`, `YYYY/MM/DD` or `YYYY-MM-DD`
    #[arg(default_value = "today")]
    date: String,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path
    ///
    /// Defaults to `fuelog_<daily|monthly>_<timestamp>.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let store = open_store(&config);
    let stem = match args.data {
        ExportData::Daily => "daily",
        ExportData::Monthly => "monthly",
    };
    let exporter = Exporter::new(args.format, args.output, stem);

    run(&store, &config.report_or_default(), args.data, &args.date, &exporter)
}

pub fn run<S: RecordSource>(store: &S, report_config: &ReportConfig, data: ExportData, day: &str, exporter: &Exporter) -> Result<()> {
    let date = parse_date_arg(day)?;

    match data {
        ExportData::Daily => {
            let rows = store
                .daily_report_rows(date)?
                .ok_or_else(|| msg_error_anyhow!(Message::DailyReportNotFound(date_label(date))))?;
            exporter.export_daily(date, &rows, &report_config.idling_marker)?;
        }
        ExportData::Monthly => {
            let key = MonthKey::of(date);
            let rows = store.monthly_rows(key)?;
            if rows.is_empty() {
                msg_bail_anyhow!(Message::MonthlyReportNotFound(key.to_string()));
            }
            exporter.export_monthly(key, &rows, &report_config.currency)?;
        }
    }

    tracing::info!(path = %exporter.output_path().display(), ?data, "report exported");
    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
