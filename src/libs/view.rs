//! Console tables for daily and monthly reports.

use super::daily::DailyReport;
use super::formatter::format_duration;
use super::monthly::MonthlyRow;
use super::report::{column, ReportRow, RowKind, DAILY_REPORT_HEADER, IDLING_TOTAL_LABEL, TOTAL_LABEL};
use super::time_span::date_label;
use super::trip::is_idling_label;
use anyhow::Result;
use prettytable::{format, row, Cell, Row, Table};

pub struct View {}

/// `1234.5` → `"1,235"`; costs are shown without decimals.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_cost(value: f64, currency: &str) -> String {
    format!("{} {}", format_amount(value), currency)
}

fn minutes(value: i64) -> String {
    format_duration(value).unwrap_or_else(|_| "-".to_string())
}

impl View {
    /// Prints the annotated trips and the summary rows of one day.
    pub fn daily(report: &DailyReport, rows: &[ReportRow], currency: &str) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            DAILY_REPORT_HEADER
                .iter()
                .enumerate()
                // Raw dashboard readings are hidden.
                .filter(|(i, _)| *i != column::DISPLAY_ECONOMY && *i != column::DISPLAY_DISTANCE)
                .map(|(_, title)| Cell::new(title).style_spec("bc"))
                .collect(),
        ));

        let mut trips = report.trips.iter();
        for row in rows {
            match row.kind {
                RowKind::Trip { idling } => {
                    let Some(trip) = trips.next() else { continue };
                    let style = if idling { "Fy" } else { "" };
                    table.add_row(Row::new(vec![
                        Cell::new(&trip.trip.destination).style_spec(style),
                        Cell::new(&trip.trip.start_time).style_spec("c"),
                        Cell::new(&trip.trip.end_time).style_spec("c"),
                        Cell::new(&minutes(trip.travel_time_minutes)).style_spec("c"),
                        Cell::new(&format!("{:.1} km", trip.distance_km)).style_spec("r"),
                        Cell::new(&format!("{:.1} l", trip.fuel_used_l)).style_spec("r"),
                        Cell::new(&format!("{:.1} km/l", trip.realized_economy_km_per_l)).style_spec("r"),
                        Cell::new(&format_cost(trip.cost, currency)).style_spec("r"),
                    ]));
                }
                RowKind::Total => {
                    let totals = &report.totals;
                    table.add_row(Row::new(vec![
                        Cell::new(&row.cells[0]).style_spec("b"),
                        Cell::new(""),
                        Cell::new(""),
                        Cell::new(&minutes(totals.total_travel_time_minutes)).style_spec("bc"),
                        Cell::new(&format!("{:.1} km", totals.total_distance_km)).style_spec("br"),
                        Cell::new(&format!("{:.1} l", totals.total_fuel_l)).style_spec("br"),
                        Cell::new(""),
                        Cell::new(&format_cost(totals.total_cost, currency)).style_spec("br"),
                    ]));
                }
                RowKind::IdlingTotal => {
                    let totals = &report.totals;
                    table.add_row(Row::new(vec![
                        Cell::new(&row.cells[0]).style_spec("bFy"),
                        Cell::new(""),
                        Cell::new(""),
                        Cell::new(&minutes(totals.idling_travel_time_minutes)).style_spec("bcFy"),
                        Cell::new(""),
                        Cell::new(&format!("{:.1} l", totals.idling_fuel_l)).style_spec("brFy"),
                        Cell::new(""),
                        Cell::new(&format_cost(totals.idling_cost, currency)).style_spec("brFy"),
                    ]));
                }
                RowKind::Title | RowKind::Header | RowKind::Separator => {}
            }
        }

        table.printstd();
        Ok(())
    }

    /// Prints a daily report as it was stored, rounding the numeric cells for display.
    pub fn stored_daily(rows: &[Vec<String>], idling_marker: &str, currency: &str) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        for (index, row) in rows.iter().enumerate() {
            if index == 0 {
                continue;
            }
            let label = row.get(column::LABEL).map(String::as_str).unwrap_or_default();
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .filter(|(col, _)| *col != column::DISPLAY_ECONOMY && *col != column::DISPLAY_DISTANCE)
                .map(|(col, text)| match (col, text.trim().parse::<f64>()) {
                    (column::DISTANCE, Ok(value)) => format!("{:.1} km", value),
                    (column::FUEL, Ok(value)) => format!("{:.1} l", value),
                    (column::ECONOMY, Ok(value)) => format!("{:.1} km/l", value),
                    (column::COST, Ok(value)) => format_cost(value, currency),
                    _ => text.clone(),
                })
                .collect();

            if index == 1 {
                table.set_titles(Row::new(cells.iter().map(|c| Cell::new(c).style_spec("bc")).collect()));
                continue;
            }

            let style = if label.eq_ignore_ascii_case(TOTAL_LABEL) {
                "b"
            } else if label.eq_ignore_ascii_case(IDLING_TOTAL_LABEL) {
                "bFy"
            } else if is_idling_label(label, idling_marker) {
                "Fy"
            } else {
                ""
            };
            table.add_row(Row::new(cells.iter().map(|c| Cell::new(c).style_spec(style)).collect()));
        }

        table.printstd();
        Ok(())
    }

    /// Prints a month's rows; idling fields of days without idling show as `-`.
    pub fn monthly(rows: &[MonthlyRow], currency: &str) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row![
            bc => "Date",
            "Travel time",
            "Distance",
            "Fuel used",
            "Fuel cost",
            "Idling time",
            "Idling fuel",
            "Idling cost",
            "Allowance",
            "Difference"
        ]);

        for month_row in rows {
            let (idling_time, idling_fuel, idling_cost) = match &month_row.idling {
                Some(idling) => (
                    minutes(idling.travel_time_minutes),
                    format!("{:.1} l", idling.fuel_l),
                    format_cost(idling.cost, currency),
                ),
                None => ("-".to_string(), "-".to_string(), "-".to_string()),
            };
            let date_style = if month_row.is_paid_day() { "cFc" } else { "c" };
            let difference_style = if month_row.is_over_budget() { "rFr" } else { "r" };

            table.add_row(Row::new(vec![
                Cell::new(&date_label(month_row.date)).style_spec(date_style),
                Cell::new(&minutes(month_row.travel_time_minutes)).style_spec("c"),
                Cell::new(&format!("{:.1} km", month_row.distance_km)).style_spec("r"),
                Cell::new(&format!("{:.1} l", month_row.fuel_l)).style_spec("r"),
                Cell::new(&format_cost(month_row.cost, currency)).style_spec("r"),
                Cell::new(&idling_time).style_spec("c"),
                Cell::new(&idling_fuel).style_spec("r"),
                Cell::new(&idling_cost).style_spec("r"),
                Cell::new(&month_row.paid_allowance.map_or_else(String::new, |paid| format_cost(paid, currency))).style_spec("r"),
                Cell::new(
                    &month_row
                        .difference
                        .map_or_else(String::new, |difference| format_cost(difference, currency)),
                )
                .style_spec(difference_style),
            ]));
        }

        table.printstd();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(1234.5), "1,235");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(-1000.0), "-1,000");
    }
}
