//! Optional plausibility checks on a day's readings.
//!
//! The calculation engine accepts any readings and lets a decreasing odometer
//! or an implausible economy jump show up as negative distance or fuel. This
//! module lets the boundary decide what to do about such data before the day
//! is aggregated, without altering what the engine computes.

use super::trip::{CumulativeReading, InitRecord, TripRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the `daily` command treats suspicious readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReadingCheck {
    /// Skip the checks entirely.
    Off,
    /// Report issues and carry on.
    #[default]
    Warn,
    /// Refuse to build the report.
    Reject,
}

/// A reading that the engine will accept but that is probably wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingIssue {
    /// The odometer went backwards between two readings.
    DecreasingDistance { index: usize, destination: String, previous: f64, current: f64 },
    /// The economy change implies a negative amount of fuel.
    NegativeFuel { index: usize, destination: String, fuel_l: f64 },
}

impl fmt::Display for ReadingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingIssue::DecreasingDistance {
                index,
                destination,
                previous,
                current,
            } => write!(
                f,
                "Trip #{} ({}): odometer went back from {} km to {} km",
                index + 1,
                destination,
                previous,
                current
            ),
            ReadingIssue::NegativeFuel { index, destination, fuel_l } => {
                write!(f, "Trip #{} ({}): computed fuel use is negative ({:.2} l)", index + 1, destination, fuel_l)
            }
        }
    }
}

/// Lists suspicious readings in log order; an empty result means nothing was found.
pub fn check_readings(init: &InitRecord, trips: &[TripRecord]) -> Vec<ReadingIssue> {
    let mut issues = Vec::new();
    let mut previous: CumulativeReading = init.reading;

    for (index, trip) in trips.iter().enumerate() {
        let current = trip.reading;

        if current.display_distance < previous.display_distance {
            issues.push(ReadingIssue::DecreasingDistance {
                index,
                destination: trip.destination.clone(),
                previous: previous.display_distance,
                current: current.display_distance,
            });
        }

        let fuel_l = current.cumulative_fuel() - previous.cumulative_fuel();
        if fuel_l < 0.0 {
            issues.push(ReadingIssue::NegativeFuel {
                index,
                destination: trip.destination.clone(),
                fuel_l,
            });
        }

        previous = current;
    }

    issues
}
