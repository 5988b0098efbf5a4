//! Display implementation for fuelog application messages.
//!
//! All user-facing text lives in this one `match`, so wording stays consistent
//! across commands and every new [`Message`] variant needs an explicit text.
//!
//! ```rust
//! use fuelog::libs::messages::Message;
//!
//! let text = Message::DailyReportNotFound("2024/05/01".to_string()).to_string();
//! assert_eq!(text, "No daily report found for 2024/05/01");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DAILY REPORT MESSAGES ===
            Message::ConfirmCreateDailyReport => "Convert the trip log into a daily report?".to_string(),
            Message::DailyReportHeader(date) => format!("Daily fuel report for {}", date),
            Message::DailyReportSaved(path) => format!("Daily report saved to {}", path),
            Message::DailyReportNotFound(date) => format!("No daily report found for {}", date),
            Message::DailyReportTotalsMissing(date) => format!("The daily report for {} has no total row", date),
            Message::DailyReportCellInvalid { date, text } => {
                format!("The daily report for {} has an invalid value '{}'. Please check it.", date, text)
            }
            Message::InitRecordDateInvalid(date) => {
                format!("The date of the initial record is not valid: '{}'. Please check it.", date)
            }
            Message::InitRecordNotFound(path) => format!("Initial record not found at {}", path),
            Message::DateMismatch { init, first } => match first {
                Some(first) => format!(
                    "The initial record date ({}) does not match the trip log date ({}). Nothing was processed.",
                    init, first
                ),
                None => format!("The trip log has no trips for {}. Nothing was processed.", init),
            },
            Message::TripLogNotFound(path) => format!("Trip log not found at {}", path),
            Message::TripTimeInvalid(time) => format!("Trip time '{}' is not a valid HH:MM time", time),

            // === READING CHECK MESSAGES ===
            Message::ReadingIssue(issue) => issue.clone(),
            Message::ReadingsRejected(count) => {
                format!("{} suspicious reading(s) found; the daily report was not created", count)
            }

            // === MONTHLY REPORT MESSAGES ===
            Message::ConfirmAddToMonthlyReport(date) => format!("Add the daily report for {} to the monthly report?", date),
            Message::NotADailyReport(label) => format!("'{}' is not a daily report. Please check it.", label),
            Message::MonthlyReportHeader(month) => format!("Monthly fuel report for {}", month),
            Message::MonthlyRowAdded { date, month } => format!("{} added to the monthly report for {}", date, month),
            Message::MonthlyReportNotFound(month) => format!("No monthly report found for {}", month),
            Message::OverBudget(difference) => format!("Fuel cost exceeded the paid allowance by {}", difference),
            Message::PromptWorkDay => "Was this a work day?".to_string(),
            Message::PromptPaidAllowance => "Enter the paid fuel allowance".to_string(),

            // === TRIP LOG ROLLOVER MESSAGES ===
            Message::ConfirmClearTripLog => {
                "Clear every trip from the trip log and carry the last reading over to the initial record?".to_string()
            }
            Message::InitRecordCarriedOver { economy, distance } => {
                format!("Initial record updated: economy {} km/l, odometer {} km", economy, distance)
            }
            Message::TripLogCleared(count) => format!("{} trip(s) cleared from the trip log", count),
            Message::NothingToClear => "The trip log has no trips to clear".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Report exported to {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::ConfigModuleStore => "Record store settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptIdlingMarker => "Destination text that marks an idling trip".to_string(),
            Message::PromptReadingCheck => "How to treat suspicious readings".to_string(),
            Message::PromptCurrency => "Currency shown after costs".to_string(),
            Message::PromptDataDir => "Directory of the trip log and reports".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidInput(input) => format!("Invalid input: '{}'", input),
        };

        write!(f, "{}", text)
    }
}
