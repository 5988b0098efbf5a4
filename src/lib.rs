//! # Fuelog - trip log fuel consumption reports
//!
//! A command-line tool that turns a vehicle's trip log into fuel reports.
//! Each trip is logged with the dashboard's cumulative odometer and
//! running-average economy; fuelog recovers per-trip distance, fuel, economy
//! and cost from consecutive readings, sums them into a daily report and
//! rolls daily totals into a monthly report with the paid fuel allowance.
//!
//! ## Features
//!
//! - **Daily Reports**: per-trip metrics and day totals, with idling trips tracked apart
//! - **Monthly Reports**: one row per day, allowance and over-budget difference
//! - **Rollover**: carry the last reading over as the next day's baseline
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fuelog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
