//! Reports module - aggregation and the five sales reports

mod aggregator;
mod sales;

pub use aggregator::{Dimension, GroupTotal, Measure, Ranking, SalesAggregator, SalesSeries};
pub use sales::SalesReports;

use crate::charts::{InteractiveChart, RenderError};
use polars::prelude::PolarsError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const GENRE_CHART_FILE: &str = "sales_by_genre.png";
pub const TIME_CHART_FILE: &str = "sales_over_time.png";
pub const PUBLISHER_CHART_FILE: &str = "top_publishers.png";

pub const DEFAULT_TOP_PUBLISHERS: usize = 10;
pub const DEFAULT_TOP_PLATFORMS: usize = 15;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("aggregation failed: {0}")]
    Polars(#[from] PolarsError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The five reports, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    SalesByGenre,
    SalesOverTime,
    TopPublishers,
    GlobalVsNorthAmerica,
    TopPlatforms,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::SalesByGenre,
        ReportKind::SalesOverTime,
        ReportKind::TopPublishers,
        ReportKind::GlobalVsNorthAmerica,
        ReportKind::TopPlatforms,
    ];
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::SalesByGenre => "sales by genre",
            ReportKind::SalesOverTime => "sales over time",
            ReportKind::TopPublishers => "top publishers",
            ReportKind::GlobalVsNorthAmerica => "global vs. north american sales",
            ReportKind::TopPlatforms => "top platforms",
        };
        f.write_str(name)
    }
}

/// Parameters shared by all reports.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
    pub top_publishers: usize,
    pub top_platforms: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            top_publishers: DEFAULT_TOP_PUBLISHERS,
            top_platforms: DEFAULT_TOP_PLATFORMS,
        }
    }
}

/// What a report produced.
#[derive(Debug, Clone)]
pub enum ReportArtifact {
    /// Static chart written to disk.
    Saved(PathBuf),
    /// Chart to be shown in the interactive viewer; nothing written.
    Interactive(InteractiveChart),
}
