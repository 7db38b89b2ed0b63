//! AOC CLI - browse and run the solution units of a catalog

mod cli;
mod config;
mod error;
mod logging;
mod output;

// Import aoc-solutions to link the solution unit plugins
use aoc_solutions as _;

use aoc_runner::{Menu, Runner, self_check};
use clap::Parser;
use cli::Args;
use config::{Config, Mode};
use error::CliError;
use std::io::{self, Write};
use tracing::{debug, info};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(&config.log_level)?;
    debug!(root = %config.root.display(), mode = ?config.mode, "configured");

    let runner = Runner::new(config.root);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.mode {
        Mode::Interactive => {
            logging::route_panics();
            let mut menu = Menu::new(&runner, io::stdin().lock(), out);
            let reason = menu.run()?;
            info!(?reason, "session finished");
        }
        Mode::SelfCheck => {
            logging::route_panics();
            self_check(&runner, &mut out)?;
        }
        Mode::List => output::write_listing(&runner, &mut out)?,
    }

    io::stdout().flush()?;
    Ok(())
}
