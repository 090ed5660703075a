use clap::Parser;
use std::path::PathBuf;
use vgsales_report::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "vgsales-report",
    about = "Clean a video game sales CSV and chart sales by genre, year, publisher and platform",
    version
)]
pub(crate) struct Cli {
    /// CSV dataset to read (default: vgsales.csv)
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Directory the PNG charts are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Number of publishers in the publisher chart
    #[arg(long)]
    top_publishers: Option<usize>,
    /// Number of platforms in the platform chart
    #[arg(long)]
    top_platforms: Option<usize>,
    /// Write charts without opening them or the interactive viewer
    #[arg(long)]
    no_display: bool,
    /// Log level or tracing filter, e.g. `debug` or `vgsales_report=trace`
    #[arg(long)]
    log_level: Option<String>,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            dataset: cli.dataset,
            output_dir: cli.output_dir,
            top_publishers: cli.top_publishers,
            top_platforms: cli.top_platforms,
            no_display: cli.no_display,
            log_level: cli.log_level,
        }
    }
}
