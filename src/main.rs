//! vgsales-report - Video game sales charts from the command line

mod cli;

use clap::Parser;
use cli::Cli;
use vgsales_report::config::AppConfig;
use vgsales_report::{pipeline, telemetry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?.with_overrides(cli.into());

    telemetry::init(&config.telemetry)?;

    pipeline::run(&config)?;
    Ok(())
}
