//! Record store: where trip logs come from and where reports go.
//!
//! The calculation engine only sees plain records. This layer supplies them
//! and keeps what the engine produces. Commands talk to the store through
//! the [`RecordSource`] and [`RecordSink`] traits. [`csv_store::CsvStore`] is
//! the implementation the binary uses:
//!
//! ```text
//! <data_dir>/
//! ├── init.csv              baseline reading + fuel price of the current day
//! ├── trips.csv             the trip log being filled during the day
//! ├── daily/2024-05-01.csv  rendered daily reports, one per day
//! └── monthly/2024-05.csv   monthly roll-ups, created on their first row
//! ```

pub mod csv_store;
pub mod records;

use crate::libs::monthly::{MonthKey, MonthlyRow};
use crate::libs::report::ReportRow;
use crate::libs::trip::{InitRecord, TripRecord};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

pub use csv_store::CsvStore;

pub trait RecordSource {
    /// The baseline record of the day being reported.
    fn init_record(&self) -> Result<InitRecord>;

    /// The trip log in chronological order.
    fn trips(&self) -> Result<Vec<TripRecord>>;

    /// The rendered rows of a stored daily report, or `None` if there is none for `date`.
    fn daily_report_rows(&self, date: NaiveDate) -> Result<Option<Vec<Vec<String>>>>;

    /// Rows already rolled into a month, in insertion order; empty if the month has none.
    fn monthly_rows(&self, month: MonthKey) -> Result<Vec<MonthlyRow>>;
}

pub trait RecordSink {
    /// Stores a day's rendered report, replacing an earlier one for the same date.
    fn write_daily_report(&self, date: NaiveDate, rows: &[ReportRow]) -> Result<PathBuf>;

    /// Appends a row to its month, creating the month on its first row.
    fn append_monthly_row(&self, row: &MonthlyRow) -> Result<PathBuf>;
}
