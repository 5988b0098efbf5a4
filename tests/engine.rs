#[cfg(test)]
mod tests {
    use fuelog::libs::daily::{aggregate_day, DailyAggregator, DailyTotals};
    use fuelog::libs::error::FuelError;
    use fuelog::libs::formatter::{format_duration, parse_duration};
    use fuelog::libs::time_span::{elapsed_minutes, minutes_since_midnight};
    use fuelog::libs::trip::{derive_metrics, CumulativeReading, InitRecord, TripRecord};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn init(date: &str, economy: f64, distance: f64) -> InitRecord {
        InitRecord {
            date: date.to_string(),
            price: 150.0,
            reading: CumulativeReading::new(economy, distance),
        }
    }

    fn trip(destination: &str, start: &str, end: &str, economy: f64, distance: f64) -> TripRecord {
        TripRecord {
            date: "2024/05/01".to_string(),
            destination: destination.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            reading: CumulativeReading::new(economy, distance),
        }
    }

    #[test]
    fn test_elapsed_minutes_same_day() {
        assert_eq!(elapsed_minutes("09:00", "09:40").unwrap(), 40);
        assert_eq!(elapsed_minutes("08:15", "17:45").unwrap(), 570);
        assert_eq!(elapsed_minutes("12:00", "12:00").unwrap(), 0);
    }

    #[test]
    fn test_elapsed_minutes_crosses_midnight() {
        assert_eq!(elapsed_minutes("23:30", "00:15").unwrap(), 45);
        assert_eq!(elapsed_minutes("22:00", "01:00").unwrap(), 180);
    }

    #[test]
    fn test_elapsed_minutes_invalid_time() {
        assert_eq!(elapsed_minutes("9am", "10:00"), Err(FuelError::InvalidFormat("9am".to_string())));
        assert!(elapsed_minutes("09:00", "25:00").is_err());
        assert!(minutes_since_midnight("").is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0).unwrap(), "0 minutes");
        assert_eq!(format_duration(59).unwrap(), "59 minutes");
        assert_eq!(format_duration(60).unwrap(), "1 hours 0 minutes");
        assert_eq!(format_duration(125).unwrap(), "2 hours 5 minutes");
        assert_eq!(format_duration(-1), Err(FuelError::InvalidArgument(-1)));
    }

    #[test]
    fn test_parse_duration_reads_formatted_text() {
        for minutes in [0, 1, 59, 60, 61, 125, 1440] {
            let text = format_duration(minutes).unwrap();
            assert_eq!(parse_duration(&text).unwrap(), minutes);
        }
        assert_eq!(parse_duration("45").unwrap(), 45);
    }

    #[test]
    fn test_derive_metrics_single_trip() {
        let previous = CumulativeReading::new(15.0, 1000.0);
        let annotated = derive_metrics(&previous, &trip("Office", "09:00", "09:40", 15.0, 1050.0), 150.0).unwrap();

        assert_eq!(annotated.travel_time_minutes, 40);
        assert!(approx(annotated.distance_km, 50.0));
        assert!(approx(annotated.fuel_used_l, 50.0 / 15.0));
        assert!(approx(annotated.realized_economy_km_per_l, 15.0));
        assert!(approx(annotated.cost, 500.0));
    }

    #[test]
    fn test_derive_metrics_without_economy_data() {
        let previous = CumulativeReading::new(0.0, 1000.0);
        let annotated = derive_metrics(&previous, &trip("Office", "09:00", "09:10", 0.0, 1010.0), 150.0).unwrap();

        assert!(approx(annotated.distance_km, 10.0));
        assert_eq!(annotated.fuel_used_l, 0.0);
        assert_eq!(annotated.realized_economy_km_per_l, 0.0);
        assert_eq!(annotated.cost, 0.0);
    }

    #[test]
    fn test_aggregate_idling_time_only_leaves_travel_total() {
        let trips = vec![
            trip("Office", "09:00", "09:30", 15.0, 1030.0),
            trip("Parking idling", "09:30", "09:40", 14.0, 1030.0),
            trip("Home", "10:00", "10:30", 14.0, 1044.0),
        ];
        let report = aggregate_day(&init("2024/05/01", 15.0, 1000.0), &trips).unwrap();
        let totals = report.totals;

        assert_eq!(report.trips.len(), 3);
        assert_eq!(totals.total_travel_time_minutes, 60);
        assert_eq!(totals.idling_travel_time_minutes, 10);
        assert!(approx(totals.total_distance_km, 44.0));

        let idling_fuel = 1030.0 / 14.0 - 1030.0 / 15.0;
        assert!(approx(totals.idling_fuel_l, idling_fuel));
        assert!(approx(totals.idling_cost, idling_fuel * 150.0));

        // Idling fuel stays in the day's fuel and cost.
        let total_fuel = 1044.0 / 14.0 - 1000.0 / 15.0;
        assert!(approx(totals.total_fuel_l, total_fuel));
        assert!(approx(totals.total_cost, total_fuel * 150.0));
    }

    #[test]
    fn test_aggregate_chains_previous_reading() {
        let trips = vec![
            trip("Office", "09:00", "09:30", 15.0, 1030.0),
            trip("Client", "11:00", "11:20", 15.0, 1045.0),
        ];
        let report = aggregate_day(&init("2024/05/01", 15.0, 1000.0), &trips).unwrap();

        assert!(approx(report.trips[0].distance_km, 30.0));
        assert!(approx(report.trips[1].distance_km, 15.0));
        assert_eq!(report.totals.total_travel_time_minutes, 50);
        assert_eq!(report.totals.idling_travel_time_minutes, 0);
        assert_eq!(report.totals.idling_fuel_l, 0.0);
    }

    #[test]
    fn test_aggregate_accepts_either_date_separator() {
        let trips = vec![trip("Office", "09:00", "09:30", 15.0, 1030.0)];
        let report = aggregate_day(&init("2024-05-01", 15.0, 1000.0), &trips).unwrap();
        assert_eq!(report.date.to_string(), "2024-05-01");
        assert_eq!(report.unit_price, 150.0);
    }

    #[test]
    fn test_aggregate_custom_idling_marker() {
        let trips = vec![
            trip("Office", "09:00", "09:30", 15.0, 1030.0),
            trip("Warm-up [IDLE]", "09:30", "09:45", 14.0, 1030.0),
        ];
        let init = init("2024/05/01", 15.0, 1000.0);

        let report = DailyAggregator::new("[IDLE]").aggregate(&init, &trips).unwrap();
        assert_eq!(report.totals.idling_travel_time_minutes, 15);
        assert_eq!(report.totals.total_travel_time_minutes, 30);

        let report = aggregate_day(&init, &trips).unwrap();
        assert_eq!(report.totals.idling_travel_time_minutes, 0);
        assert_eq!(report.totals.total_travel_time_minutes, 45);
    }

    #[test]
    fn test_aggregate_empty_idling_marker_marks_nothing() {
        let trips = vec![trip("Office", "09:00", "09:30", 15.0, 1030.0)];
        let report = DailyAggregator::new("").aggregate(&init("2024/05/01", 15.0, 1000.0), &trips).unwrap();

        assert_eq!(report.totals.total_travel_time_minutes, 30);
        assert_eq!(report.totals.idling_travel_time_minutes, 0);
        assert_eq!(report.totals.idling_fuel_l, 0.0);
        assert_eq!(report.totals.idling_cost, 0.0);
    }

    #[test]
    fn test_aggregate_date_mismatch() {
        let mut other_day = trip("Office", "09:00", "09:30", 15.0, 1030.0);
        other_day.date = "2024/05/02".to_string();

        let err = aggregate_day(&init("2024/05/01", 15.0, 1000.0), &[other_day]).unwrap_err();
        assert_eq!(
            err,
            FuelError::DateMismatch {
                init: "2024/05/01".to_string(),
                first: Some("2024/05/02".to_string()),
            }
        );
    }

    #[test]
    fn test_aggregate_empty_log_is_date_mismatch() {
        let err = aggregate_day(&init("2024/05/01", 15.0, 1000.0), &[]).unwrap_err();
        assert_eq!(
            err,
            FuelError::DateMismatch {
                init: "2024/05/01".to_string(),
                first: None,
            }
        );
    }

    #[test]
    fn test_aggregate_invalid_init_date_checked_first() {
        let err = aggregate_day(&init("", 15.0, 1000.0), &[]).unwrap_err();
        assert_eq!(err, FuelError::InvalidInitDate(String::new()));

        let err = aggregate_day(&init("2024/02/30", 15.0, 1000.0), &[]).unwrap_err();
        assert_eq!(err, FuelError::InvalidInitDate("2024/02/30".to_string()));
    }

    #[test]
    fn test_aggregate_bad_trip_time_yields_no_report() {
        let trips = vec![
            trip("Office", "09:00", "09:30", 15.0, 1030.0),
            trip("Client", "11:00", "11:xx", 15.0, 1045.0),
        ];
        let err = aggregate_day(&init("2024/05/01", 15.0, 1000.0), &trips).unwrap_err();
        assert_eq!(err, FuelError::InvalidFormat("11:xx".to_string()));
    }

    #[test]
    fn test_daily_totals_default_is_zero() {
        let totals = DailyTotals::default();
        assert_eq!(totals.total_travel_time_minutes, 0);
        assert_eq!(totals.total_cost, 0.0);
    }
}
