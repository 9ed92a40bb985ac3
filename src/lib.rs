//! Core library for the unit root workbench.
//!
//! The binary in `main.rs` provides the egui shell; everything that does not
//! touch the screen lives here so the pipeline can be exercised headless:
//!
//! * [`data`] – spreadsheet loading and the tabular model
//! * [`stats`] – the unit root / stationarity test engines

pub mod data;
pub mod stats;
