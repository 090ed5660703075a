//! Video game sales report
//!
//! Loads a video game sales CSV, cleans it with Polars and renders a fixed set
//! of charts summarizing sales by genre, year, publisher and platform.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod pipeline;
pub mod reports;
pub mod telemetry;
