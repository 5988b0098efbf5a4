//! Monthly roll-up of daily totals.
//!
//! A month is an append-only list of [`MonthlyRow`]s owned by the caller. The
//! engine never reorders or deduplicates it: appending the same day twice
//! yields two rows. Callers that want re-running a day to replace its row go
//! through [`MonthlyLedger::upsert`] instead.

use super::daily::DailyTotals;
use super::error::FuelError;
use super::time_span::parse_date_label;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Idling figures of a day that had idling time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdlingTotals {
    pub travel_time_minutes: i64,
    pub fuel_l: f64,
    pub cost: f64,
}

/// One reporting day within a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub date: NaiveDate,
    pub travel_time_minutes: i64,
    pub distance_km: f64,
    pub fuel_l: f64,
    pub cost: f64,
    /// `None` when the day had no idling time ("not applicable").
    pub idling: Option<IdlingTotals>,
    pub paid_allowance: Option<f64>,
    /// `paid_allowance - cost`, present only on paid days.
    pub difference: Option<f64>,
}

impl MonthlyRow {
    /// Builds the row for one day. A paid allowance also sets the difference.
    pub fn new(date: NaiveDate, totals: &DailyTotals, paid_allowance: Option<f64>) -> Self {
        let idling = (totals.idling_travel_time_minutes != 0).then(|| IdlingTotals {
            travel_time_minutes: totals.idling_travel_time_minutes,
            fuel_l: totals.idling_fuel_l,
            cost: totals.idling_cost,
        });

        Self {
            date,
            travel_time_minutes: totals.total_travel_time_minutes,
            distance_km: totals.total_distance_km,
            fuel_l: totals.total_fuel_l,
            cost: totals.total_cost,
            idling,
            paid_allowance,
            difference: paid_allowance.map(|paid| paid - totals.total_cost),
        }
    }

    /// True when the allowance did not cover the day's fuel cost.
    pub fn is_over_budget(&self) -> bool {
        self.difference.is_some_and(|difference| difference < 0.0)
    }

    /// Whether an allowance was paid for this day.
    pub fn is_paid_day(&self) -> bool {
        self.paid_allowance.is_some()
    }
}

/// Appends one day's totals to a month and returns the new row.
///
/// `day_label` is the day's label from the record store (`YYYY/MM/DD`).
///
/// # Errors
///
/// [`FuelError::NotADailyRecord`] if `day_label` is not a calendar date; the
/// collection is left untouched.
pub fn append_day_to_month(
    month: &mut Vec<MonthlyRow>,
    day_label: &str,
    totals: &DailyTotals,
    paid_allowance: Option<f64>,
) -> Result<MonthlyRow, FuelError> {
    let date = parse_date_label(day_label).ok_or_else(|| FuelError::NotADailyRecord(day_label.to_string()))?;
    let row = MonthlyRow::new(date, totals, paid_allowance);
    month.push(row.clone());
    Ok(row)
}

/// Year and month that key a collection of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Monthly collections keyed by month, each created on its first row.
#[derive(Debug, Clone, Default)]
pub struct MonthlyLedger {
    months: BTreeMap<MonthKey, Vec<MonthlyRow>>,
}

impl MonthlyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day to its month without any deduplication.
    pub fn append(&mut self, day_label: &str, totals: &DailyTotals, paid_allowance: Option<f64>) -> Result<MonthlyRow, FuelError> {
        let date = parse_date_label(day_label).ok_or_else(|| FuelError::NotADailyRecord(day_label.to_string()))?;
        let month = self.months.entry(MonthKey::of(date)).or_default();
        append_day_to_month(month, day_label, totals, paid_allowance)
    }

    /// Replaces the row for the same date in place, or appends when the day is new.
    pub fn upsert(&mut self, day_label: &str, totals: &DailyTotals, paid_allowance: Option<f64>) -> Result<MonthlyRow, FuelError> {
        let date = parse_date_label(day_label).ok_or_else(|| FuelError::NotADailyRecord(day_label.to_string()))?;
        let month = self.months.entry(MonthKey::of(date)).or_default();

        match month.iter_mut().find(|row| row.date == date) {
            Some(existing) => {
                *existing = MonthlyRow::new(date, totals, paid_allowance);
                Ok(existing.clone())
            }
            None => append_day_to_month(month, day_label, totals, paid_allowance),
        }
    }

    pub fn month(&self, key: MonthKey) -> Option<&[MonthlyRow]> {
        self.months.get(&key).map(Vec::as_slice)
    }

    pub fn months(&self) -> impl Iterator<Item = (&MonthKey, &Vec<MonthlyRow>)> {
        self.months.iter()
    }
}
