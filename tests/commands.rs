#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fuelog::commands::{clear, daily, monthly, parse_date_arg};
    use fuelog::libs::config::ReportConfig;
    use fuelog::libs::interaction::PresetInteraction;
    use fuelog::libs::monthly::MonthKey;
    use fuelog::libs::report::{column, TOTAL_LABEL};
    use fuelog::libs::trip::{CumulativeReading, InitRecord, TripRecord};
    use fuelog::libs::validation::ReadingCheck;
    use fuelog::store::{CsvStore, RecordSource};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        _temp_dir: TempDir,
        store: CsvStore,
        report_config: ReportConfig,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = CsvStore::new(temp_dir.path());
            store
                .write_init_record(&InitRecord {
                    date: "2024/05/01".to_string(),
                    price: 150.0,
                    reading: CumulativeReading::new(15.0, 1000.0),
                })
                .unwrap();
            store.write_trips(&day_trips()).unwrap();

            CommandTestContext {
                _temp_dir: temp_dir,
                store,
                report_config: ReportConfig::default(),
            }
        }
    }

    fn day_trips() -> Vec<TripRecord> {
        vec![
            TripRecord {
                date: "2024/05/01".to_string(),
                destination: "Office".to_string(),
                start_time: "09:00".to_string(),
                end_time: "09:40".to_string(),
                reading: CumulativeReading::new(15.0, 1050.0),
            },
            TripRecord {
                date: "2024/05/01".to_string(),
                destination: "Office idling".to_string(),
                start_time: "09:40".to_string(),
                end_time: "09:50".to_string(),
                reading: CumulativeReading::new(14.0, 1050.0),
            },
        ]
    }

    fn yes() -> PresetInteraction {
        PresetInteraction {
            confirm: true,
            paid_allowance: None,
        }
    }

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_daily_writes_report(ctx: &mut CommandTestContext) {
        let report = daily::run(&ctx.store, &ctx.report_config, &yes()).unwrap().unwrap();

        assert_eq!(report.date, may_first());
        assert_eq!(report.totals.total_travel_time_minutes, 40);
        assert_eq!(report.totals.idling_travel_time_minutes, 10);
        assert!(ctx.store.daily_report_path(may_first()).exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_daily_declined_writes_nothing(ctx: &mut CommandTestContext) {
        let outcome = daily::run(&ctx.store, &ctx.report_config, &PresetInteraction::default()).unwrap();

        assert!(outcome.is_none());
        assert!(!ctx.store.daily_report_path(may_first()).exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_daily_date_mismatch_is_reported(ctx: &mut CommandTestContext) {
        let mut trips = day_trips();
        trips[0].date = "2024/05/02".to_string();
        ctx.store.write_trips(&trips).unwrap();

        let err = daily::run(&ctx.store, &ctx.report_config, &yes()).unwrap_err();
        assert!(err.to_string().contains("2024/05/02"));
        assert!(!ctx.store.daily_report_path(may_first()).exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_daily_reject_stops_on_suspicious_readings(ctx: &mut CommandTestContext) {
        let mut trips = day_trips();
        trips[1].reading.display_distance = 1040.0;
        ctx.store.write_trips(&trips).unwrap();
        ctx.report_config.reading_check = ReadingCheck::Reject;

        assert!(daily::run(&ctx.store, &ctx.report_config, &yes()).is_err());
        assert!(!ctx.store.daily_report_path(may_first()).exists());

        ctx.report_config.reading_check = ReadingCheck::Warn;
        assert!(daily::run(&ctx.store, &ctx.report_config, &yes()).unwrap().is_some());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_monthly_appends_stored_day(ctx: &mut CommandTestContext) {
        let report = daily::run(&ctx.store, &ctx.report_config, &yes()).unwrap().unwrap();

        let paid = PresetInteraction {
            confirm: true,
            paid_allowance: Some(2000.0),
        };
        let row = monthly::run(&ctx.store, &ctx.report_config, "2024-05-01", &paid).unwrap().unwrap();

        assert_eq!(row.date, may_first());
        assert_eq!(row.travel_time_minutes, report.totals.total_travel_time_minutes);
        assert_eq!(row.cost, report.totals.total_cost);
        assert_eq!(row.difference, Some(2000.0 - report.totals.total_cost));
        assert_eq!(row.idling.unwrap().travel_time_minutes, 10);

        let rows = ctx.store.monthly_rows(MonthKey { year: 2024, month: 5 }).unwrap();
        assert_eq!(rows, vec![row]);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_monthly_without_daily_report(ctx: &mut CommandTestContext) {
        let err = monthly::run(&ctx.store, &ctx.report_config, "2024/05/01", &yes()).unwrap_err();
        assert!(err.to_string().contains("No daily report found for 2024/05/01"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_monthly_reports_corrupt_total_cell(ctx: &mut CommandTestContext) {
        daily::run(&ctx.store, &ctx.report_config, &yes()).unwrap();

        let mut rows = ctx.store.daily_report_rows(may_first()).unwrap().unwrap();
        let total = rows
            .iter_mut()
            .rfind(|row| row.get(column::LABEL).map(String::as_str) == Some(TOTAL_LABEL))
            .unwrap();
        total[column::DISTANCE] = "abc".to_string();

        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(ctx.store.daily_report_path(may_first()))
            .unwrap();
        for row in &rows {
            wtr.write_record(row).unwrap();
        }
        wtr.flush().unwrap();

        let err = monthly::run(&ctx.store, &ctx.report_config, "2024/05/01", &yes()).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("The daily report for 2024/05/01 has an invalid value 'abc'"));
        assert!(!text.contains("Trip time"));
        assert!(ctx.store.monthly_rows(MonthKey { year: 2024, month: 5 }).unwrap().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_monthly_rejects_unreadable_date(ctx: &mut CommandTestContext) {
        daily::run(&ctx.store, &ctx.report_config, &yes()).unwrap();

        let err = monthly::run(&ctx.store, &ctx.report_config, "May 1st", &yes()).unwrap_err();
        assert!(err.to_string().contains("'May 1st' is not a daily report"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_clear_starts_next_day(ctx: &mut CommandTestContext) {
        let rollover = clear::run(&ctx.store, &yes()).unwrap().unwrap();
        assert_eq!(rollover.cleared, 2);

        let init = ctx.store.init_record().unwrap();
        assert_eq!(init.reading, CumulativeReading::new(14.0, 1050.0));
        assert!(init.date.is_empty());
        assert!(ctx.store.trips().unwrap().is_empty());

        assert!(clear::run(&ctx.store, &yes()).unwrap().is_none());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_clear_declined_keeps_log(ctx: &mut CommandTestContext) {
        assert!(clear::run(&ctx.store, &PresetInteraction::default()).unwrap().is_none());
        assert_eq!(ctx.store.trips().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg("2024/05/01").unwrap(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(parse_date_arg("2024-05-01").unwrap(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(parse_date_arg("today").is_ok());
        assert!(parse_date_arg("May 1st").is_err());
    }
}
