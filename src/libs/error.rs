//! Error kinds raised by the calculation engine.
//!
//! Every engine operation fails synchronously with one of these variants and
//! returns no partial output. Division by zero in fuel or economy math is not
//! an error; those paths degrade to `0.0` instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelError {
    /// A clock time, duration or numeric report cell could not be parsed.
    #[error("invalid format: '{0}'")]
    InvalidFormat(String),

    /// A negative minute count was passed to the duration formatter.
    #[error("invalid argument: duration must not be negative (got {0} minutes)")]
    InvalidArgument(i64),

    /// The day's baseline record carries a date that is not a calendar date.
    #[error("the initial record date is not valid: '{0}'")]
    InvalidInitDate(String),

    /// The label handed to the monthly roll-up is not a calendar date.
    #[error("'{0}' is not a daily record")]
    NotADailyRecord(String),

    /// The first trip does not belong to the baseline record's day, or there are no trips at all.
    #[error("the initial record date {init} does not match the first trip date {}", .first.as_deref().unwrap_or("(no trips)"))]
    DateMismatch { init: String, first: Option<String> },

    /// A rendered daily report has no row labeled "total".
    #[error("the daily report has no total row")]
    TotalRowNotFound,
}
