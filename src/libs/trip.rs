//! Trip records and the per-trip metrics calculation.
//!
//! A vehicle's dashboard shows two cumulative values: the odometer distance
//! and a running-average fuel economy. Neither says anything about a single
//! trip on its own. The fuel burned during a trip is recovered by turning both
//! the previous and the current dashboard state into "total fuel burned so far"
//! (`distance / economy`) and taking the difference.
//!
//! ```text
//! previous reading ──┐
//!                    ├─▶ distance = cur.distance - prev.distance
//! current reading ───┤   fuel     = cur.distance / cur.economy - prev.distance / prev.economy
//!                    │   economy  = distance / fuel
//! unit price ────────┴─▶ cost     = fuel * unit price
//! ```
//!
//! A zero denominator means "no economy data yet" and yields `0.0` rather than
//! an error. Decreasing or otherwise implausible readings are passed through
//! untouched; see [`crate::libs::validation`] for the optional boundary check.

use super::error::FuelError;
use super::time_span::elapsed_minutes;
use serde::{Deserialize, Serialize};

/// The vehicle's dashboard state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeReading {
    /// Running-average fuel economy shown by the vehicle (km/L).
    pub display_economy: f64,
    /// Odometer reading (km).
    pub display_distance: f64,
}

impl CumulativeReading {
    pub fn new(display_economy: f64, display_distance: f64) -> Self {
        Self {
            display_economy,
            display_distance,
        }
    }

    /// Total fuel burned up to this reading, or `0.0` when no economy is shown yet.
    pub fn cumulative_fuel(&self) -> f64 {
        if self.display_economy == 0.0 {
            return 0.0;
        }
        self.display_distance / self.display_economy
    }
}

/// The baseline state right before a day's first trip, plus that day's fuel price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitRecord {
    /// Day label as supplied by the record store (`YYYY/MM/DD`).
    pub date: String,
    /// Fuel unit price used for every cost on this day.
    pub price: f64,
    pub reading: CumulativeReading,
}

/// One trip as it was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub date: String,
    /// Free text; contains the idling marker for stationary fuel consumption.
    pub destination: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub reading: CumulativeReading,
}

/// Whether a destination or report label carries the idling marker.
///
/// Case-sensitive substring match. An empty marker marks nothing as idling.
pub fn is_idling_label(label: &str, idling_marker: &str) -> bool {
    !idling_marker.is_empty() && label.contains(idling_marker)
}

impl TripRecord {
    /// Whether the destination flags this trip as idling; see [`is_idling_label`].
    pub fn is_idling(&self, idling_marker: &str) -> bool {
        is_idling_label(&self.destination, idling_marker)
    }
}

/// A trip together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedTrip {
    pub trip: TripRecord,
    pub travel_time_minutes: i64,
    pub distance_km: f64,
    pub fuel_used_l: f64,
    pub realized_economy_km_per_l: f64,
    pub cost: f64,
}

/// Derives a trip's incremental metrics relative to the reading before it.
///
/// `previous` is the day's [`InitRecord`] reading for the first trip and the
/// preceding trip's reading afterwards. `unit_price` always comes from the
/// day's [`InitRecord`].
///
/// # Errors
///
/// Fails with [`FuelError::InvalidFormat`] when either trip time is not a valid `HH:MM`.
///
/// # Examples
///
/// ```rust
/// use fuelog::libs::trip::{derive_metrics, CumulativeReading, TripRecord};
///
/// let previous = CumulativeReading::new(15.0, 1000.0);
/// let trip = TripRecord {
///     date: "2024/05/01".to_string(),
///     destination: "Office".to_string(),
///     start_time: "09:00".to_string(),
///     end_time: "09:40".to_string(),
///     reading: CumulativeReading::new(15.0, 1050.0),
/// };
///
/// let annotated = derive_metrics(&previous, &trip, 150.0).unwrap();
/// assert_eq!(annotated.travel_time_minutes, 40);
/// assert_eq!(annotated.distance_km, 50.0);
/// ```
pub fn derive_metrics(previous: &CumulativeReading, trip: &TripRecord, unit_price: f64) -> Result<AnnotatedTrip, FuelError> {
    let travel_time_minutes = elapsed_minutes(&trip.start_time, &trip.end_time)?;

    let distance_km = trip.reading.display_distance - previous.display_distance;
    let fuel_used_l = trip.reading.cumulative_fuel() - previous.cumulative_fuel();
    let realized_economy_km_per_l = if fuel_used_l == 0.0 { 0.0 } else { distance_km / fuel_used_l };

    Ok(AnnotatedTrip {
        trip: trip.clone(),
        travel_time_minutes,
        distance_km,
        fuel_used_l,
        realized_economy_km_per_l,
        cost: fuel_used_l * unit_price,
    })
}
