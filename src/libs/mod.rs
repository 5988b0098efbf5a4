//! Library modules of fuelog.
//!
//! ## Layout
//!
//! - **Engine**: [`time_span`], [`formatter`], [`trip`], [`daily`], [`monthly`],
//!   [`report`] and [`error`]. Pure functions over plain records, no I/O.
//! - **Boundary**: [`validation`], [`config`], [`data_storage`], [`interaction`]
//! - **Output**: [`messages`], [`view`], [`export`]
//!
//! ```rust
//! use fuelog::libs::daily::aggregate_day;
//! use fuelog::libs::trip::{CumulativeReading, InitRecord, TripRecord};
//!
//! let init = InitRecord {
//!     date: "2024/05/01".to_string(),
//!     price: 150.0,
//!     reading: CumulativeReading::new(15.0, 1000.0),
//! };
//! let trips = vec![TripRecord {
//!     date: "2024/05/01".to_string(),
//!     destination: "Office".to_string(),
//!     start_time: "09:00".to_string(),
//!     end_time: "09:40".to_string(),
//!     reading: CumulativeReading::new(15.0, 1050.0),
//! }];
//!
//! let report = aggregate_day(&init, &trips)?;
//! assert_eq!(report.totals.total_travel_time_minutes, 40);
//! # Ok::<(), fuelog::libs::error::FuelError>(())
//! ```

pub mod config;
pub mod daily;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod interaction;
pub mod messages;
pub mod monthly;
pub mod report;
pub mod time_span;
pub mod trip;
pub mod validation;
pub mod view;
