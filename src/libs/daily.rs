//! Folds one day's trip log into annotated trips and daily totals.
//!
//! Each trip is measured against the reading immediately before it, so the
//! day is processed as a fold that carries the previous
//! [`CumulativeReading`] forward, starting from the day's [`InitRecord`].
//!
//! Idling trips (destination contains the idling marker) are accounted
//! asymmetrically: their time is removed from the total travel time, while
//! their distance, fuel and cost stay in the day's totals. Idling burns fuel
//! without driving, and the totals keep that fuel on the bill.

use super::error::FuelError;
use super::time_span::parse_date_label;
use super::trip::{derive_metrics, AnnotatedTrip, CumulativeReading, InitRecord, TripRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Destination substring that marks a trip as idling unless configured otherwise.
pub const DEFAULT_IDLING_MARKER: &str = "idling";

/// Aggregates over one day's annotated trips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Travel time of all trips minus idling time.
    pub total_travel_time_minutes: i64,
    /// Includes idling trips.
    pub total_distance_km: f64,
    /// Includes idling trips.
    pub total_fuel_l: f64,
    /// Includes idling trips.
    pub total_cost: f64,
    pub idling_travel_time_minutes: i64,
    pub idling_fuel_l: f64,
    pub idling_cost: f64,
}

/// The outcome of aggregating a day: trips in log order plus their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub unit_price: f64,
    pub trips: Vec<AnnotatedTrip>,
    pub totals: DailyTotals,
}

/// Day aggregation with a configurable idling marker.
#[derive(Debug, Clone)]
pub struct DailyAggregator {
    idling_marker: String,
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_IDLING_MARKER)
    }
}

impl DailyAggregator {
    pub fn new(idling_marker: impl Into<String>) -> Self {
        Self {
            idling_marker: idling_marker.into(),
        }
    }

    pub fn idling_marker(&self) -> &str {
        &self.idling_marker
    }

    /// Annotates every trip of the day and accumulates the totals.
    ///
    /// # Errors
    ///
    /// - [`FuelError::InvalidInitDate`] if `init.date` is not a calendar date,
    ///   checked before any trip is looked at
    /// - [`FuelError::DateMismatch`] if `trips` is empty or the first trip is
    ///   dated differently from `init`
    /// - [`FuelError::InvalidFormat`] if any trip carries a malformed time
    ///
    /// On error nothing is returned; there is no partial report.
    pub fn aggregate(&self, init: &InitRecord, trips: &[TripRecord]) -> Result<DailyReport, FuelError> {
        let date = parse_date_label(&init.date).ok_or_else(|| FuelError::InvalidInitDate(init.date.clone()))?;

        let first = trips.first().ok_or_else(|| FuelError::DateMismatch {
            init: init.date.clone(),
            first: None,
        })?;
        if parse_date_label(&first.date) != Some(date) {
            return Err(FuelError::DateMismatch {
                init: init.date.clone(),
                first: Some(first.date.clone()),
            });
        }

        let (annotated, mut totals, _) = trips.iter().try_fold(
            (Vec::with_capacity(trips.len()), DailyTotals::default(), init.reading),
            |(mut annotated, mut totals, previous): (Vec<AnnotatedTrip>, DailyTotals, CumulativeReading), trip| {
                let metrics = derive_metrics(&previous, trip, init.price)?;

                totals.total_travel_time_minutes += metrics.travel_time_minutes;
                totals.total_distance_km += metrics.distance_km;
                totals.total_fuel_l += metrics.fuel_used_l;
                totals.total_cost += metrics.cost;

                if trip.is_idling(&self.idling_marker) {
                    totals.idling_travel_time_minutes += metrics.travel_time_minutes;
                    totals.idling_fuel_l += metrics.fuel_used_l;
                    totals.idling_cost += metrics.cost;
                }

                annotated.push(metrics);
                Ok::<_, FuelError>((annotated, totals, trip.reading))
            },
        )?;

        // Only the time of idling trips leaves the travel total.
        totals.total_travel_time_minutes -= totals.idling_travel_time_minutes;

        Ok(DailyReport {
            date,
            unit_price: init.price,
            trips: annotated,
            totals,
        })
    }
}

/// Aggregates a day using the default idling marker.
pub fn aggregate_day(init: &InitRecord, trips: &[TripRecord]) -> Result<DailyReport, FuelError> {
    DailyAggregator::default().aggregate(init, trips)
}
