//! Daily report layout: rendering a [`DailyReport`] into labeled rows and
//! reading the totals back out of them.
//!
//! The monthly roll-up does not receive totals directly. It reads a daily
//! report that was written earlier, finds the row labeled "total" (and an
//! "idling total" row right after it, if present) and maps fixed column
//! positions back onto [`DailyTotals`].
//!
//! ```text
//! row  │ 0 Destination │ 1 Start │ 2 End │ 3 Disp. economy │ 4 Disp. distance │ 5 Travel time │ 6 Distance │ 7 Fuel │ 8 Economy │ 9 Cost
//! ─────┼───────────────┼─────────┼───────┼─────────────────┼──────────────────┼───────────────┼────────────┼────────┼───────────┼───────
//! 0    │ 2024/05/01    │ (title)
//! 1    │ header
//! 2..n │ one row per trip
//! n+1  │ (empty)
//! n+2  │ Total         │         │       │                 │                  │ 1 hours 0 min │ 50         │ 3.33   │           │ 500
//! n+3  │ Idling total  │         │       │                 │                  │ 10 minutes    │            │ 0.2    │           │ 30      (only with idling time)
//! ```
//!
//! Numbers are written with full `f64` precision, so a report read back
//! yields the exact totals it was rendered from.

use super::daily::{DailyReport, DailyTotals};
use super::error::FuelError;
use super::formatter::{format_duration, parse_duration};
use super::time_span::date_label;

pub const TOTAL_LABEL: &str = "Total";
pub const IDLING_TOTAL_LABEL: &str = "Idling total";

pub const DAILY_REPORT_HEADER: [&str; 10] = [
    "Destination",
    "Start",
    "End",
    "Display economy",
    "Display distance",
    "Travel time",
    "Distance",
    "Fuel used",
    "Economy",
    "Fuel cost",
];

/// Zero-based column positions shared by the trip rows and the summary rows.
pub mod column {
    pub const LABEL: usize = 0;
    pub const START: usize = 1;
    pub const END: usize = 2;
    pub const DISPLAY_ECONOMY: usize = 3;
    pub const DISPLAY_DISTANCE: usize = 4;
    pub const TRAVEL_TIME: usize = 5;
    pub const DISTANCE: usize = 6;
    pub const FUEL: usize = 7;
    pub const ECONOMY: usize = 8;
    pub const COST: usize = 9;
}

/// Which part of the report a rendered row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Title,
    Header,
    Trip { idling: bool },
    Separator,
    Total,
    IdlingTotal,
}

/// A rendered report row and its role, for sinks that style rows differently.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub kind: RowKind,
    pub cells: Vec<String>,
}

fn blank_row() -> Vec<String> {
    vec![String::new(); DAILY_REPORT_HEADER.len()]
}

/// Renders a day into labeled rows, marking idling trips with `idling_marker`.
pub fn daily_report_rows(report: &DailyReport, idling_marker: &str) -> Result<Vec<ReportRow>, FuelError> {
    let totals = &report.totals;
    let mut rows = Vec::with_capacity(report.trips.len() + 5);

    let mut title = blank_row();
    title[column::LABEL] = date_label(report.date);
    rows.push(ReportRow {
        kind: RowKind::Title,
        cells: title,
    });
    rows.push(ReportRow {
        kind: RowKind::Header,
        cells: DAILY_REPORT_HEADER.iter().map(|h| h.to_string()).collect(),
    });

    for annotated in &report.trips {
        let trip = &annotated.trip;
        rows.push(ReportRow {
            kind: RowKind::Trip {
                idling: trip.is_idling(idling_marker),
            },
            cells: vec![
                trip.destination.clone(),
                trip.start_time.clone(),
                trip.end_time.clone(),
                trip.reading.display_economy.to_string(),
                trip.reading.display_distance.to_string(),
                format_duration(annotated.travel_time_minutes)?,
                annotated.distance_km.to_string(),
                annotated.fuel_used_l.to_string(),
                annotated.realized_economy_km_per_l.to_string(),
                annotated.cost.to_string(),
            ],
        });
    }

    rows.push(ReportRow {
        kind: RowKind::Separator,
        cells: blank_row(),
    });

    let mut total = blank_row();
    total[column::LABEL] = TOTAL_LABEL.to_string();
    total[column::TRAVEL_TIME] = format_duration(totals.total_travel_time_minutes)?;
    total[column::DISTANCE] = totals.total_distance_km.to_string();
    total[column::FUEL] = totals.total_fuel_l.to_string();
    total[column::COST] = totals.total_cost.to_string();
    rows.push(ReportRow {
        kind: RowKind::Total,
        cells: total,
    });

    if totals.idling_travel_time_minutes != 0 {
        let mut idling = blank_row();
        idling[column::LABEL] = IDLING_TOTAL_LABEL.to_string();
        idling[column::TRAVEL_TIME] = format_duration(totals.idling_travel_time_minutes)?;
        idling[column::FUEL] = totals.idling_fuel_l.to_string();
        idling[column::COST] = totals.idling_cost.to_string();
        rows.push(ReportRow {
            kind: RowKind::IdlingTotal,
            cells: idling,
        });
    }

    Ok(rows)
}

fn label_is(row: &[String], label: &str) -> bool {
    row.get(column::LABEL).is_some_and(|cell| cell.trim().eq_ignore_ascii_case(label))
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|c| c.trim()).unwrap_or_default()
}

fn number_cell(row: &[String], index: usize) -> Result<f64, FuelError> {
    let text = cell(row, index);
    text.parse::<f64>().map_err(|_| FuelError::InvalidFormat(text.to_string()))
}

fn duration_cell(row: &[String], index: usize) -> Result<i64, FuelError> {
    parse_duration(cell(row, index))
}

/// Recovers a day's totals from its rendered rows.
///
/// The last row labeled "total" (case-insensitive) is used, so a trip whose
/// destination happens to read "Total" is never mistaken for the summary.
///
/// # Errors
///
/// - [`FuelError::TotalRowNotFound`] when no row is labeled "total"
/// - [`FuelError::InvalidFormat`] when a summary cell is not a number or duration
pub fn extract_daily_totals(rows: &[Vec<String>]) -> Result<DailyTotals, FuelError> {
    let total_index = rows
        .iter()
        .rposition(|row| label_is(row, TOTAL_LABEL))
        .ok_or(FuelError::TotalRowNotFound)?;
    let total = &rows[total_index];

    let mut totals = DailyTotals {
        total_travel_time_minutes: duration_cell(total, column::TRAVEL_TIME)?,
        total_distance_km: number_cell(total, column::DISTANCE)?,
        total_fuel_l: number_cell(total, column::FUEL)?,
        total_cost: number_cell(total, column::COST)?,
        ..DailyTotals::default()
    };

    if let Some(idling) = rows.get(total_index + 1).filter(|row| label_is(row, IDLING_TOTAL_LABEL)) {
        totals.idling_travel_time_minutes = duration_cell(idling, column::TRAVEL_TIME)?;
        totals.idling_fuel_l = number_cell(idling, column::FUEL)?;
        totals.idling_cost = number_cell(idling, column::COST)?;
    }

    Ok(totals)
}
