//! Exports stored reports to files for use outside the tool.
//!
//! ## Features
//!
//! - **Export Formats**: CSV, JSON and Excel
//! - **Report Types**: one day's report, or one month's roll-up
//! - **Excel Styling**: unit number formats (`0.0"km"`, `0.0"l"`, `0.0"km/l"`,
//!   `#,##0` costs), highlighted idling rows, bold summary rows and red
//!   differences on over-budget days
//!
//! ```rust,no_run
//! use fuelog::libs::export::{ExportFormat, Exporter};
//! use fuelog::libs::monthly::MonthKey;
//!
//! let exporter = Exporter::new(ExportFormat::Excel, None, "monthly");
//! exporter.export_monthly(MonthKey { year: 2024, month: 5 }, &[], "JPY")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::monthly::{MonthKey, MonthlyRow};
use super::report::{column, extract_daily_totals, IDLING_TOTAL_LABEL, TOTAL_LABEL};
use super::time_span::date_label;
use super::trip::is_idling_label;
use crate::store::records::MonthlyRecord;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADER_COLOR: u32 = 0xCFE2F3;
const IDLING_COLOR: u32 = 0xFCE5CD;
const SUMMARY_COLOR: u32 = 0xF3F3F3;

const KM_FORMAT: &str = "0.0\"km\"";
const LITRE_FORMAT: &str = "0.0\"l\"";
const ECONOMY_FORMAT: &str = "0.0\"km/l\"";
const COST_FORMAT: &str = "#,##0";

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

/// Which stored report to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    Daily,
    Monthly,
}

#[derive(Debug, Serialize)]
struct DailyExport<'a> {
    date: String,
    rows: &'a [Vec<String>],
    totals: crate::libs::daily::DailyTotals,
}

#[derive(Debug, Serialize)]
struct MonthlyExport<'a> {
    month: String,
    rows: &'a [MonthlyRow],
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path the file is named
    /// `fuelog_<stem>_<timestamp>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, stem: &str) -> Self {
        let default_name = format!("fuelog_{}_{}", stem, Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Exports the rendered rows of one stored daily report.
    pub fn export_daily(&self, date: NaiveDate, rows: &[Vec<String>], idling_marker: &str) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_daily_csv(rows),
            ExportFormat::Json => {
                let export = DailyExport {
                    date: date_label(date),
                    rows,
                    totals: extract_daily_totals(rows)?,
                };
                self.write_json(&export)
            }
            ExportFormat::Excel => self.export_daily_excel(date, rows, idling_marker),
        }
    }

    /// Exports one month's rows.
    pub fn export_monthly(&self, month: MonthKey, rows: &[MonthlyRow], currency: &str) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_monthly_csv(rows),
            ExportFormat::Json => self.write_json(&MonthlyExport {
                month: month.to_string(),
                rows,
            }),
            ExportFormat::Excel => self.export_monthly_excel(month, rows, currency),
        }
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_daily_csv(&self, rows: &[Vec<String>]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_monthly_csv(&self, rows: &[MonthlyRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            wtr.serialize(MonthlyRecord::from(row))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_daily_excel(&self, date: NaiveDate, rows: &[Vec<String>], idling_marker: &str) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(date.format("%Y-%m-%d").to_string())?;

        let title_format = Format::new().set_bold().set_font_size(12.0);
        let header_format = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(Color::RGB(HEADER_COLOR));
        let plain = Format::new();
        let idling = Format::new().set_background_color(Color::RGB(IDLING_COLOR));
        let summary = Format::new().set_bold().set_background_color(Color::RGB(SUMMARY_COLOR));
        let idling_summary = Format::new().set_bold().set_background_color(Color::RGB(IDLING_COLOR));

        for (index, row) in rows.iter().enumerate() {
            let row_num = index as u32;
            let label = row.get(column::LABEL).map(String::as_str).unwrap_or_default();

            if index == 0 {
                worksheet.write_string_with_format(row_num, 0, label, &title_format)?;
                continue;
            }
            if index == 1 {
                for (col, cell) in row.iter().enumerate() {
                    worksheet.write_string_with_format(row_num, col as u16, cell, &header_format)?;
                }
                continue;
            }

            let base = if label.eq_ignore_ascii_case(TOTAL_LABEL) {
                &summary
            } else if label.eq_ignore_ascii_case(IDLING_TOTAL_LABEL) {
                &idling_summary
            } else if is_idling_label(label, idling_marker) {
                &idling
            } else {
                &plain
            };

            for (col, cell) in row.iter().enumerate() {
                let number_format = match col {
                    column::DISTANCE => Some(KM_FORMAT),
                    column::FUEL => Some(LITRE_FORMAT),
                    column::ECONOMY => Some(ECONOMY_FORMAT),
                    column::COST => Some(COST_FORMAT),
                    _ => None,
                };

                match (number_format, cell.trim().parse::<f64>()) {
                    (Some(num_format), Ok(value)) => {
                        let format = base.clone().set_num_format(num_format);
                        worksheet.write_number_with_format(row_num, col as u16, value, &format)?;
                    }
                    _ => {
                        worksheet.write_string_with_format(row_num, col as u16, cell, base)?;
                    }
                }
            }
        }

        // The raw dashboard readings are kept in the file but out of the way.
        worksheet.set_column_hidden(column::DISPLAY_ECONOMY as u16)?;
        worksheet.set_column_hidden(column::DISPLAY_DISTANCE as u16)?;
        worksheet.autofit();

        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_monthly_excel(&self, month: MonthKey, rows: &[MonthlyRow], currency: &str) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(month.to_string())?;

        let header_format = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(Color::RGB(HEADER_COLOR));
        let headers = [
            "Date".to_string(),
            "Travel time (min)".to_string(),
            "Distance".to_string(),
            "Fuel used".to_string(),
            format!("Fuel cost ({})", currency),
            "Idling time (min)".to_string(),
            "Idling fuel".to_string(),
            format!("Idling cost ({})", currency),
            format!("Allowance ({})", currency),
            format!("Difference ({})", currency),
        ];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }

        for (index, month_row) in rows.iter().enumerate() {
            let row_num = index as u32 + 1;

            let day = if month_row.is_paid_day() {
                Format::new().set_background_color(Color::RGB(HEADER_COLOR))
            } else {
                Format::new()
            };
            worksheet.write_string_with_format(row_num, 0, date_label(month_row.date), &day.clone().set_align(FormatAlign::Center))?;
            worksheet.write_number_with_format(row_num, 1, month_row.travel_time_minutes as f64, &day)?;
            worksheet.write_number_with_format(row_num, 2, month_row.distance_km, &day.clone().set_num_format(KM_FORMAT))?;
            worksheet.write_number_with_format(row_num, 3, month_row.fuel_l, &day.clone().set_num_format(LITRE_FORMAT))?;
            worksheet.write_number_with_format(row_num, 4, month_row.cost, &day.clone().set_num_format(COST_FORMAT))?;

            match &month_row.idling {
                Some(idling) => {
                    let highlight = Format::new().set_background_color(Color::RGB(IDLING_COLOR));
                    worksheet.write_number_with_format(row_num, 5, idling.travel_time_minutes as f64, &highlight)?;
                    worksheet.write_number_with_format(row_num, 6, idling.fuel_l, &highlight.clone().set_num_format(LITRE_FORMAT))?;
                    worksheet.write_number_with_format(row_num, 7, idling.cost, &highlight.clone().set_num_format(COST_FORMAT))?;
                }
                None => {
                    let centered = Format::new().set_align(FormatAlign::Center);
                    for col in 5..=7 {
                        worksheet.write_string_with_format(row_num, col, "-", &centered)?;
                    }
                }
            }

            if let Some(paid) = month_row.paid_allowance {
                worksheet.write_number_with_format(row_num, 8, paid, &Format::new().set_num_format(COST_FORMAT))?;
            }
            if let Some(difference) = month_row.difference {
                let mut format = Format::new().set_num_format(COST_FORMAT);
                if month_row.is_over_budget() {
                    format = format.set_font_color(Color::Red);
                }
                worksheet.write_number_with_format(row_num, 9, difference, &format)?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
