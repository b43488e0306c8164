//! Command-line interface for the `launchboard` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use launchboard_core::Filters;
use launchboard_logging::Verbosity;

/// launchboard - browse the SpaceX launch history as an HTML table
///
/// Queries the public launches API with optional year, outcome and search
/// filters and renders the result into an HTML page.
#[derive(Debug, Parser)]
#[command(name = "launchboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (RON)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the launches endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch once with the given filters, render, and exit
    Fetch(RenderArgs),

    /// Re-fetch on every filter change typed on stdin
    Watch(RenderArgs),

    /// Print the request URL for the given filters without fetching
    Url(FilterArgs),
}

/// The four filter controls. Values are trimmed; empty means unset.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Launch year, e.g. 2017
    #[arg(long)]
    pub year: Option<String>,

    /// Launch outcome, `true` or `false`
    #[arg(long)]
    pub success: Option<String>,

    /// Search category, e.g. mission_name, rocket_name, rocket_id
    #[arg(long)]
    pub category: Option<String>,

    /// Search text for the chosen category
    #[arg(long)]
    pub query: Option<String>,
}

impl FilterArgs {
    pub fn to_filters(&self) -> Filters {
        Filters::new(
            self.year.as_deref().unwrap_or_default(),
            self.success.as_deref().unwrap_or_default(),
            self.category.as_deref().unwrap_or_default(),
            self.query.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Where to write the rendered page (`-` for stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
