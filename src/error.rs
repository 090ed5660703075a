use crate::config::ConfigError;
use crate::data::CleanError;
use crate::reports::ReportKind;
use crate::telemetry::TelemetryError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cleaning failed: {0}")]
    Clean(#[from] CleanError),
    #[error("{kind} report failed: {source}")]
    Report {
        kind: ReportKind,
        #[source]
        source: PolarsError,
    },
    #[error("chart viewer error: {0}")]
    Viewer(String),
}
