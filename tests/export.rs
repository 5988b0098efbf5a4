#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fuelog::libs::daily::aggregate_day;
    use fuelog::libs::export::{ExportFormat, Exporter};
    use fuelog::libs::monthly::{MonthKey, MonthlyRow};
    use fuelog::libs::report::daily_report_rows;
    use fuelog::libs::trip::{CumulativeReading, InitRecord, TripRecord};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        daily_rows: Vec<Vec<String>>,
        monthly_rows: Vec<MonthlyRow>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let init = InitRecord {
                date: "2024/05/01".to_string(),
                price: 150.0,
                reading: CumulativeReading::new(15.0, 1000.0),
            };
            let trips = vec![
                TripRecord {
                    date: "2024/05/01".to_string(),
                    destination: "Office".to_string(),
                    start_time: "09:00".to_string(),
                    end_time: "09:40".to_string(),
                    reading: CumulativeReading::new(15.0, 1050.0),
                },
                TripRecord {
                    date: "2024/05/01".to_string(),
                    destination: "Lot idling".to_string(),
                    start_time: "09:40".to_string(),
                    end_time: "09:55".to_string(),
                    reading: CumulativeReading::new(14.5, 1050.0),
                },
            ];
            let report = aggregate_day(&init, &trips).unwrap();
            let daily_rows = daily_report_rows(&report, "idling")
                .unwrap()
                .into_iter()
                .map(|row| row.cells)
                .collect();
            let monthly_rows = vec![
                MonthlyRow::new(report.date, &report.totals, Some(400.0)),
                MonthlyRow::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), &report.totals, None),
            ];

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                daily_rows,
                monthly_rows,
            }
        }
    }

    fn may() -> MonthKey {
        MonthKey { year: 2024, month: 5 }
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None, "monthly");
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("fuelog_monthly_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_daily_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("daily.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()), "daily");
        exporter
            .export_daily(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), &ctx.daily_rows, "idling")
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("2024/05/01"));
        assert!(contents.lines().any(|line| line.starts_with("Total,")));
        assert!(contents.lines().any(|line| line.starts_with("Idling total,")));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_daily_json_carries_totals(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("daily.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()), "daily");
        exporter
            .export_daily(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), &ctx.daily_rows, "idling")
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["date"], "2024/05/01");
        assert_eq!(value["totals"]["total_travel_time_minutes"], 40);
        assert_eq!(value["totals"]["idling_travel_time_minutes"], 15);
        assert_eq!(value["rows"].as_array().unwrap().len(), ctx.daily_rows.len());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_monthly_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("monthly.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()), "monthly");
        exporter.export_monthly(may(), &ctx.monthly_rows, "JPY").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("date,travel_time_minutes"));
        assert!(lines[1].starts_with("2024-05-01,40,"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_monthly_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("monthly.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()), "monthly");
        exporter.export_monthly(may(), &ctx.monthly_rows, "JPY").unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["month"], "2024-05");
        assert_eq!(value["rows"][0]["paid_allowance"], 400.0);
        assert!(value["rows"][1]["difference"].is_null());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel_files(ctx: &mut ExportTestContext) {
        let daily = ctx.temp_dir.path().join("daily.xlsx");
        Exporter::new(ExportFormat::Excel, Some(daily.clone()), "daily")
            .export_daily(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), &ctx.daily_rows, "idling")
            .unwrap();

        let monthly = ctx.temp_dir.path().join("monthly.xlsx");
        Exporter::new(ExportFormat::Excel, Some(monthly.clone()), "monthly")
            .export_monthly(may(), &ctx.monthly_rows, "JPY")
            .unwrap();

        assert!(fs::metadata(&daily).unwrap().len() > 0);
        assert!(fs::metadata(&monthly).unwrap().len() > 0);
    }
}
