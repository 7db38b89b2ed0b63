//! Error types for the runner library

use crate::catalog::Identifier;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for parsing a catalog directory name into an [`Identifier`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name does not start with the expected prefix
    #[error("'{name}' does not start with '{prefix}'")]
    MissingPrefix { prefix: &'static str, name: String },
    /// Nothing is left once the prefix is stripped
    #[error("'{name}' has nothing after the '{prefix}' prefix")]
    Empty { prefix: &'static str, name: String },
    /// The remainder cannot be used as a path component
    #[error("'{0}' is not a valid identifier")]
    Invalid(String),
}

/// Error type for loading a solution unit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// There is no unit file at the expected location
    #[error("solution unit {} does not exist", .path.display())]
    Missing { path: PathBuf },
    /// The unit file exists but no unit is compiled in for it
    #[error("no solution unit is registered for year {year} day {day}")]
    NotRegistered { year: Identifier, day: Identifier },
    /// More than one unit claims the same year and day
    #[error("more than one solution unit is registered for year {year} day {day}")]
    Duplicate { year: Identifier, day: Identifier },
}

/// Error type returned by a solution unit's entry point
#[derive(Debug, Error)]
pub enum SolveError {
    /// The input file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input does not have the expected shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An error occurred while solving
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for executing an entry point
///
/// Every variant renders as the message shown to the user in place of an
/// answer; none of them ends the session.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The unit could not be loaded
    #[error("Error executing solution: {0}")]
    Load(#[from] LoadError),
    /// The unit does not expose the requested entry point
    #[error("Function {0} not found")]
    EntryPointNotFound(&'static str),
    /// The unit's directory could not be entered
    #[error("Error executing solution: cannot enter {}: {source}", .path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The entry point returned an error
    #[error("Error executing solution: {0}")]
    Solve(#[from] SolveError),
    /// The entry point panicked
    #[error("Error executing solution: panicked: {0}")]
    Panicked(String),
}

/// Error type for the interactive menu
///
/// Only terminal I/O failures stop the menu; everything else is reported
/// inside the session.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading the prompt answer or writing output failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
