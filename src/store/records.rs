//! Row shapes of the CSV files and their conversion to engine records.

use crate::libs::monthly::{IdlingTotals, MonthlyRow};
use crate::libs::trip::{CumulativeReading, InitRecord, TripRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const TRIP_LOG_HEADER: [&str; 7] = ["id", "date", "destination", "start_time", "end_time", "display_economy", "display_distance"];

/// `init.csv`: the baseline before the day's first trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitRow {
    #[serde(default)]
    pub date: String,
    pub price: f64,
    pub display_economy: f64,
    pub display_distance: f64,
}

impl From<InitRow> for InitRecord {
    fn from(row: InitRow) -> Self {
        InitRecord {
            date: row.date.trim().to_string(),
            price: row.price,
            reading: CumulativeReading::new(row.display_economy, row.display_distance),
        }
    }
}

impl From<&InitRecord> for InitRow {
    fn from(record: &InitRecord) -> Self {
        InitRow {
            date: record.date.clone(),
            price: record.price,
            display_economy: record.reading.display_economy,
            display_distance: record.reading.display_distance,
        }
    }
}

/// `trips.csv`: one logged trip. The id column is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRow {
    #[serde(default)]
    pub id: Option<u32>,
    pub date: String,
    pub destination: String,
    pub start_time: String,
    pub end_time: String,
    pub display_economy: f64,
    pub display_distance: f64,
}

impl From<TripRow> for TripRecord {
    fn from(row: TripRow) -> Self {
        TripRecord {
            date: row.date.trim().to_string(),
            destination: row.destination,
            start_time: row.start_time.trim().to_string(),
            end_time: row.end_time.trim().to_string(),
            reading: CumulativeReading::new(row.display_economy, row.display_distance),
        }
    }
}

/// `monthly/<YYYY-MM>.csv`: a flattened [`MonthlyRow`]; empty idling and
/// allowance cells read back as "not applicable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub date: NaiveDate,
    pub travel_time_minutes: i64,
    pub distance_km: f64,
    pub fuel_l: f64,
    pub cost: f64,
    pub idling_travel_time_minutes: Option<i64>,
    pub idling_fuel_l: Option<f64>,
    pub idling_cost: Option<f64>,
    pub paid_allowance: Option<f64>,
    pub difference: Option<f64>,
}

impl From<&MonthlyRow> for MonthlyRecord {
    fn from(row: &MonthlyRow) -> Self {
        MonthlyRecord {
            date: row.date,
            travel_time_minutes: row.travel_time_minutes,
            distance_km: row.distance_km,
            fuel_l: row.fuel_l,
            cost: row.cost,
            idling_travel_time_minutes: row.idling.map(|i| i.travel_time_minutes),
            idling_fuel_l: row.idling.map(|i| i.fuel_l),
            idling_cost: row.idling.map(|i| i.cost),
            paid_allowance: row.paid_allowance,
            difference: row.difference,
        }
    }
}

impl From<MonthlyRecord> for MonthlyRow {
    fn from(record: MonthlyRecord) -> Self {
        let idling = match (record.idling_travel_time_minutes, record.idling_fuel_l, record.idling_cost) {
            (Some(travel_time_minutes), fuel_l, cost) => Some(IdlingTotals {
                travel_time_minutes,
                fuel_l: fuel_l.unwrap_or_default(),
                cost: cost.unwrap_or_default(),
            }),
            _ => None,
        };

        MonthlyRow {
            date: record.date,
            travel_time_minutes: record.travel_time_minutes,
            distance_km: record.distance_km,
            fuel_l: record.fuel_l,
            cost: record.cost,
            idling,
            paid_allowance: record.paid_allowance,
            difference: record.difference,
        }
    }
}
