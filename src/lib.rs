//! # Eckho - Employee Check-in and Hours Overview
//!
//! A command-line utility for tracking employee attendance events and
//! deriving daily workforce status for two staffing cohorts.
//!
//! ## Features
//!
//! - **Status Classification**: Derives On Time / Late / Undertime / Overtime
//!   from a day's time-in, time-out and break events
//! - **Dual Schedules**: Fixed 8AM-5PM warehouse shifts and flexible field
//!   shifts anchored to a per-employee expected start time
//! - **Live Tracking**: Time-in, time-out, break-in and break-out actions
//!   with strict ordering rules
//! - **Attendance Reports**: Per-day rosters, per-employee history with
//!   weekly and monthly grouping, monthly status tallies
//! - **Data Export**: Export rosters and history to CSV and JSON
//! - **Seed Data**: Generate realistic demo history for a roster
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eckho::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
