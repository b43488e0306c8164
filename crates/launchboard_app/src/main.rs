mod app;
mod cli;
mod config;
mod effects;
mod input;
mod logging;
mod output;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use launchboard_logging::{board_debug, board_info};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> anyhow::Result<ExitCode> {
    let source = config::AppConfig::locate(cli.config.as_deref());
    let config = config::AppConfig::load(source.as_deref()).context("loading configuration")?;
    logging::initialize(config.log_destination, cli.verbosity().level_filter());
    match &source {
        Some(path) => board_info!("Loaded configuration from {:?}", path),
        None => board_debug!("No configuration file; using defaults"),
    }
    app::run(cli, config)
}
