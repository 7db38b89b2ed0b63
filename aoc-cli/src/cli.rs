//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Browse and run Advent of Code solutions", version)]
pub struct Args {
    /// Run the first discovered day once and print diagnostics instead of the menu
    #[arg(long)]
    pub test: bool,

    /// List every year and day on disk with the parts registered for it
    #[arg(long, conflicts_with = "test")]
    pub list: bool,

    /// Catalog root holding `year_<Y>/day_<D>/` directories
    /// (defaults to the bundled solutions)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Log filter for diagnostics on stderr, e.g. `debug` or `aoc_runner=trace`
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
