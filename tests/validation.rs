#[cfg(test)]
mod tests {
    use fuelog::libs::trip::{CumulativeReading, InitRecord, TripRecord};
    use fuelog::libs::validation::{check_readings, ReadingIssue};

    fn init() -> InitRecord {
        InitRecord {
            date: "2024/05/01".to_string(),
            price: 150.0,
            reading: CumulativeReading::new(15.0, 1000.0),
        }
    }

    fn trip(destination: &str, economy: f64, distance: f64) -> TripRecord {
        TripRecord {
            date: "2024/05/01".to_string(),
            destination: destination.to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            reading: CumulativeReading::new(economy, distance),
        }
    }

    #[test]
    fn test_plausible_readings_pass() {
        let trips = vec![trip("Office", 15.0, 1030.0), trip("Home", 15.2, 1060.0)];
        assert!(check_readings(&init(), &trips).is_empty());
    }

    #[test]
    fn test_decreasing_odometer() {
        let trips = vec![trip("Office", 15.0, 1030.0), trip("Home", 15.0, 1020.0)];
        let issues = check_readings(&init(), &trips);

        assert!(issues.contains(&ReadingIssue::DecreasingDistance {
            index: 1,
            destination: "Home".to_string(),
            previous: 1030.0,
            current: 1020.0,
        }));
        assert!(issues[0].to_string().starts_with("Trip #2 (Home)"));
    }

    #[test]
    fn test_negative_fuel() {
        // Economy jumps up while barely moving.
        let trips = vec![trip("Office", 20.0, 1001.0)];
        let issues = check_readings(&init(), &trips);

        assert_eq!(issues.len(), 1);
        match &issues[0] {
            ReadingIssue::NegativeFuel { index, fuel_l, .. } => {
                assert_eq!(*index, 0);
                assert!(*fuel_l < 0.0);
            }
            other => panic!("unexpected issue: {:?}", other),
        }
    }
}
