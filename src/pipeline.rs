//! Load → clean → report, then show what was produced.

use crate::charts::InteractiveChart;
use crate::config::AppConfig;
use crate::data::{DataCleaner, DataLoader, SalesTable};
use crate::error::AppError;
use crate::gui;
use crate::reports::{ReportArtifact, ReportError, ReportKind, ReportSettings, SalesReports};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything one run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub saved: Vec<PathBuf>,
    pub interactive: Vec<InteractiveChart>,
    /// Reports whose chart could not be rendered or written.
    pub failed: Vec<ReportKind>,
}

/// Load and clean the dataset. A missing or unreadable file yields `None`.
pub fn prepare(dataset: &Path) -> Result<Option<SalesTable>, AppError> {
    let raw = DataLoader::load(dataset);
    let cleaned = raw.as_ref().map(DataCleaner::clean).transpose()?;

    if let (Some(raw), Some(table)) = (&raw, &cleaned) {
        info!(
            loaded = raw.height(),
            kept = table.height(),
            "cleaned sales data"
        );
    }
    Ok(cleaned)
}

/// Run the five reports in order against the (possibly absent) table.
///
/// Rendering and file errors are logged and the next report still runs;
/// aggregation errors stop the run.
pub fn run_reports(
    table: Option<&SalesTable>,
    settings: &ReportSettings,
) -> Result<RunSummary, AppError> {
    if table.is_some() {
        fs::create_dir_all(&settings.output_dir)?;
    }

    let mut summary = RunSummary::default();
    for kind in ReportKind::ALL {
        match SalesReports::run(kind, table, settings) {
            Ok(Some(ReportArtifact::Saved(path))) => summary.saved.push(path),
            Ok(Some(ReportArtifact::Interactive(chart))) => summary.interactive.push(chart),
            Ok(None) => {}
            Err(ReportError::Polars(source)) => return Err(AppError::Report { kind, source }),
            Err(err) => {
                warn!(report = %kind, "{err}");
                summary.failed.push(kind);
            }
        }
    }
    Ok(summary)
}

/// Open saved charts in the default image viewer and show interactive ones.
pub fn display(summary: RunSummary) -> Result<(), AppError> {
    for path in &summary.saved {
        if let Err(err) = open::that(path) {
            warn!("could not open '{}': {err}", path.display());
        }
    }

    if summary.interactive.is_empty() {
        return Ok(());
    }
    gui::show_charts(summary.interactive).map_err(|e| AppError::Viewer(e.to_string()))
}

/// Full run as configured.
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let table = prepare(&config.dataset)?;
    let summary = run_reports(table.as_ref(), &config.reports)?;

    info!(
        saved = summary.saved.len(),
        interactive = summary.interactive.len(),
        failed = summary.failed.len(),
        "reports finished"
    );

    if config.display {
        display(summary)?;
    }
    Ok(())
}
