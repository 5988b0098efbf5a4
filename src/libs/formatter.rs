//! Duration formatting for trip and report display.
//!
//! Travel times are kept as whole minutes throughout the application and only
//! turned into text when a report row is rendered. The same text is read back
//! when a stored daily report is rolled into its month, so [`parse_duration`]
//! accepts exactly what [`format_duration`] produces.
//!
//! ## Format Specifications
//!
//! - Under one hour: `"{minutes} minutes"`
//! - One hour or more: `"{hours} hours {minutes} minutes"`
//!
//! ### Examples
//! - 0 minutes → "0 minutes"
//! - 59 minutes → "59 minutes"
//! - 60 minutes → "1 hours 0 minutes"
//! - 125 minutes → "2 hours 5 minutes"
//!
//! ## Examples
//!
//! ```rust
//! use fuelog::libs::formatter::{format_duration, parse_duration};
//!
//! let text = format_duration(125).unwrap();
//! assert_eq!(text, "2 hours 5 minutes");
//! assert_eq!(parse_duration(&text).unwrap(), 125);
//! ```

use super::error::FuelError;

/// Formats a minute count as `"H hours M minutes"`, or `"M minutes"` below one hour.
///
/// Negative input is rejected with [`FuelError::InvalidArgument`].
pub fn format_duration(minutes: i64) -> Result<String, FuelError> {
    if minutes < 0 {
        return Err(FuelError::InvalidArgument(minutes));
    }

    if minutes < 60 {
        return Ok(format!("{} minutes", minutes));
    }

    Ok(format!("{} hours {} minutes", minutes / 60, minutes % 60))
}

/// Reads a duration written by [`format_duration`] back into minutes.
///
/// A bare integer is accepted as a minute count, since spreadsheet tools
/// sometimes strip the unit words from a cell.
pub fn parse_duration(text: &str) -> Result<i64, FuelError> {
    let invalid = || FuelError::InvalidFormat(text.to_string());
    let words: Vec<&str> = text.split_whitespace().collect();

    let number = |word: &str| word.parse::<i64>().ok().filter(|n| *n >= 0);

    match words.as_slice() {
        [minutes] => number(minutes).ok_or_else(invalid),
        [minutes, "minutes"] => number(minutes).ok_or_else(invalid),
        [hours, "hours", minutes, "minutes"] => {
            let hours = number(hours).ok_or_else(invalid)?;
            let minutes = number(minutes).filter(|m| *m < 60).ok_or_else(invalid)?;
            Ok(hours * 60 + minutes)
        }
        _ => Err(invalid()),
    }
}
