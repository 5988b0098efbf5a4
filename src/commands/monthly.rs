//! Monthly roll-up command.
//!
//! Reads a stored daily report back, recovers its totals from the summary
//! rows and appends one row to the month's report together with the fuel
//! allowance paid for the day.

use super::{engine_error, open_store, parse_date_arg};
use crate::{
    libs::{
        config::{Config, ReportConfig},
        error::FuelError,
        interaction::{Interaction, PresetInteraction, TerminalInteraction},
        messages::Message,
        monthly::{append_day_to_month, MonthKey, MonthlyRow},
        report::extract_daily_totals,
        time_span::date_label,
        view::{format_cost, View},
    },
    msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
    store::{RecordSink, RecordSource},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthlyArgs {
    /// Day of the daily report to add: `today`, `YYYY/MM/DD` or `YYYY-MM-DD`
    date: String,

    /// Fuel allowance paid for the day
    #[arg(long, requires = "yes", conflicts_with = "no_work")]
    paid: Option<f64>,

    /// The day was not a work day, so no allowance was paid
    #[arg(long, requires = "yes")]
    no_work: bool,

    /// Skip the prompts; without --paid the day is recorded as unpaid
    #[arg(short, long)]
    yes: bool,
}

/// Executes the monthly command.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments; `--paid` and `--no-work` only
///   apply together with `--yes`
///
/// # Returns
///
/// Returns `Ok(())` when the day is added or the user declines, or an error
/// if no readable daily report exists for the date.
pub fn cmd(args: MonthlyArgs) -> Result<()> {
    let config = Config::read()?;
    let report_config = config.report_or_default();
    let store = open_store(&config);

    if args.yes {
        let preset = PresetInteraction {
            confirm: true,
            paid_allowance: if args.no_work { None } else { args.paid },
        };
        run(&store, &report_config, &args.date, &preset)?;
    } else {
        run(&store, &report_config, &args.date, &TerminalInteraction)?;
    }
    Ok(())
}

/// Adds the day's stored report to its month. Returns `None` when the user declines.
pub fn run<S>(store: &S, report_config: &ReportConfig, day: &str, interaction: &dyn Interaction) -> Result<Option<MonthlyRow>>
where
    S: RecordSource + RecordSink,
{
    // A date that cannot be read cannot name a stored daily report.
    let date = parse_date_arg(day).map_err(|_| engine_error(FuelError::NotADailyRecord(day.to_string())))?;
    let label = date_label(date);

    let rows = store
        .daily_report_rows(date)?
        .ok_or_else(|| msg_error_anyhow!(Message::DailyReportNotFound(label.clone())))?;
    let totals = extract_daily_totals(&rows).map_err(|err| match err {
        FuelError::TotalRowNotFound => msg_error_anyhow!(Message::DailyReportTotalsMissing(label.clone())),
        FuelError::InvalidFormat(text) => msg_error_anyhow!(Message::DailyReportCellInvalid {
            date: label.clone(),
            text,
        }),
        other => engine_error(other),
    })?;

    if !interaction.confirm(Message::ConfirmAddToMonthlyReport(label.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(None);
    }
    let paid_allowance = interaction.paid_allowance()?;

    let key = MonthKey::of(date);
    let mut month = store.monthly_rows(key)?;
    let row = append_day_to_month(&mut month, &label, &totals, paid_allowance).map_err(engine_error)?;
    store.append_monthly_row(&row)?;
    tracing::info!(date = %row.date, month = %key, rows = month.len(), "monthly row appended");

    msg_success!(Message::MonthlyRowAdded {
        date: label,
        month: key.to_string(),
    });
    if let Some(difference) = row.difference.filter(|_| row.is_over_budget()) {
        msg_warning!(Message::OverBudget(format_cost(-difference, &report_config.currency)));
    }

    msg_print!(Message::MonthlyReportHeader(key.to_string()), true);
    View::monthly(&month, &report_config.currency)?;

    Ok(Some(row))
}
