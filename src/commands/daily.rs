//! Daily report command.
//!
//! Reads the baseline record and the trip log, optionally checks the
//! readings, aggregates the day and stores the rendered report, replacing
//! any earlier report for the same date.

use super::{engine_error, open_store};
use crate::{
    libs::{
        config::{Config, ReportConfig},
        daily::{DailyAggregator, DailyReport},
        interaction::{Interaction, PresetInteraction, TerminalInteraction},
        messages::Message,
        report::daily_report_rows,
        time_span::date_label,
        validation::{check_readings, ReadingCheck},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
    store::{RecordSink, RecordSource},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DailyArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Override the configured treatment of suspicious readings
    #[arg(long, value_enum)]
    check: Option<ReadingCheck>,
}

/// Executes the daily command.
///
/// Loads the configuration, applies the `--check` override and runs the
/// report either with prompts or, with `--yes`, without them.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` when the report is stored or the user declines, or an
/// error if the records are missing, inconsistent or rejected by the check.
pub fn cmd(args: DailyArgs) -> Result<()> {
    let config = Config::read()?;
    let mut report_config = config.report_or_default();
    if let Some(check) = args.check {
        report_config.reading_check = check;
    }
    let store = open_store(&config);

    if args.yes {
        let preset = PresetInteraction {
            confirm: true,
            ..Default::default()
        };
        run(&store, &report_config, &preset)?;
    } else {
        run(&store, &report_config, &TerminalInteraction)?;
    }
    Ok(())
}

/// Builds and stores the day's report. Returns `None` when the user declines.
pub fn run<S>(store: &S, report_config: &ReportConfig, interaction: &dyn Interaction) -> Result<Option<DailyReport>>
where
    S: RecordSource + RecordSink,
{
    if !interaction.confirm(Message::ConfirmCreateDailyReport)? {
        msg_info!(Message::OperationCancelled);
        return Ok(None);
    }

    let init = store.init_record()?;
    let trips = store.trips()?;

    if report_config.reading_check != ReadingCheck::Off {
        let issues = check_readings(&init, &trips);
        for issue in &issues {
            msg_warning!(Message::ReadingIssue(issue.to_string()));
        }
        if report_config.reading_check == ReadingCheck::Reject && !issues.is_empty() {
            msg_bail_anyhow!(Message::ReadingsRejected(issues.len()));
        }
    }

    let aggregator = DailyAggregator::new(report_config.idling_marker.as_str());
    let report = aggregator.aggregate(&init, &trips).map_err(engine_error)?;
    let rows = daily_report_rows(&report, aggregator.idling_marker()).map_err(engine_error)?;
    let path = store.write_daily_report(report.date, &rows)?;
    tracing::info!(date = %report.date, trips = report.trips.len(), "daily report built");

    msg_print!(Message::DailyReportHeader(date_label(report.date)), true);
    View::daily(&report, &rows, &report_config.currency)?;
    msg_success!(Message::DailyReportSaved(path.display().to_string()));

    Ok(Some(report))
}
