//! Error types for the CLI

use aoc_runner::MenuError;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalog root cannot be resolved
    #[error("Catalog root {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive session failed
    #[error("{0}")]
    Menu(#[from] MenuError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
