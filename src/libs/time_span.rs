//! Clock-time arithmetic for trip records.
//!
//! Trips are logged with `HH:MM` start and end times and no date of their own,
//! so a trip that ends "earlier" than it started is taken to cross midnight
//! exactly once.

use super::error::FuelError;
use chrono::{NaiveDate, NaiveTime, Timelike};

/// Minutes in one day, added when a span wraps past midnight.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Date label formats accepted from the record store, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Parses an `HH:MM` clock time into minutes since midnight.
///
/// Hours must lie in `0..=23` and minutes in `0..=59`; anything else is
/// reported as [`FuelError::InvalidFormat`].
pub fn minutes_since_midnight(time: &str) -> Result<i64, FuelError> {
    let parsed = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| FuelError::InvalidFormat(time.to_string()))?;
    Ok(i64::from(parsed.hour()) * 60 + i64::from(parsed.minute()))
}

/// Returns the minutes elapsed between two `HH:MM` clock times.
///
/// When `end` is before `start` the span is assumed to cross midnight once,
/// so one day is added to `end`.
///
/// # Examples
///
/// ```rust
/// use fuelog::libs::time_span::elapsed_minutes;
///
/// assert_eq!(elapsed_minutes("09:00", "09:40").unwrap(), 40);
/// assert_eq!(elapsed_minutes("23:30", "00:15").unwrap(), 45);
/// ```
pub fn elapsed_minutes(start: &str, end: &str) -> Result<i64, FuelError> {
    let start = minutes_since_midnight(start)?;
    let mut end = minutes_since_midnight(end)?;

    if end < start {
        end += MINUTES_PER_DAY;
    }

    Ok(end - start)
}

/// Parses a date label such as `2024/05/01` or `2024-05-01`.
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    DATE_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(label, format).ok())
}

/// Renders a date the way the record store labels days.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
