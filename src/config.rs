//! Run configuration: `.env`, environment variables, then CLI overrides.

use crate::reports::{ReportSettings, DEFAULT_TOP_PLATFORMS, DEFAULT_TOP_PUBLISHERS};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DATASET: &str = "vgsales.csv";

const ENV_DATASET: &str = "VGSALES_DATASET";
const ENV_OUTPUT_DIR: &str = "VGSALES_OUTPUT_DIR";
const ENV_TOP_PUBLISHERS: &str = "VGSALES_TOP_PUBLISHERS";
const ENV_TOP_PLATFORMS: &str = "VGSALES_TOP_PLATFORMS";
const ENV_DISPLAY: &str = "VGSALES_DISPLAY";
const ENV_LOG_LEVEL: &str = "VGSALES_LOG_LEVEL";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidCount { var: &'static str, value: String },
    #[error("{var} must be true or false, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

/// Logging controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Top-level configuration for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset: PathBuf,
    pub reports: ReportSettings,
    /// Open written charts and show the interactive viewer.
    pub display: bool,
    pub telemetry: TelemetryConfig,
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub dataset: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub top_publishers: Option<usize>,
    pub top_platforms: Option<usize>,
    pub no_display: bool,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let dataset = env::var(ENV_DATASET).unwrap_or_else(|_| DEFAULT_DATASET.to_string());
        let output_dir = env::var(ENV_OUTPUT_DIR).unwrap_or_else(|_| ".".to_string());
        let top_publishers = Self::count_var(ENV_TOP_PUBLISHERS, DEFAULT_TOP_PUBLISHERS)?;
        let top_platforms = Self::count_var(ENV_TOP_PLATFORMS, DEFAULT_TOP_PLATFORMS)?;
        let display = Self::flag_var(ENV_DISPLAY, true)?;
        let log_level = env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            dataset: PathBuf::from(dataset),
            reports: ReportSettings {
                output_dir: PathBuf::from(output_dir),
                top_publishers,
                top_platforms,
            },
            display,
            telemetry: TelemetryConfig { log_level },
        })
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dataset) = overrides.dataset {
            self.dataset = dataset;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.reports.output_dir = output_dir;
        }
        if let Some(n) = overrides.top_publishers {
            self.reports.top_publishers = n;
        }
        if let Some(n) = overrides.top_platforms {
            self.reports.top_platforms = n;
        }
        if overrides.no_display {
            self.display = false;
        }
        if let Some(level) = overrides.log_level {
            self.telemetry.log_level = level;
        }
        self
    }

    fn count_var(var: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCount { var, value }),
            Err(_) => Ok(default),
        }
    }

    fn flag_var(var: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidFlag { var, value }),
            },
            Err(_) => Ok(default),
        }
    }
}
