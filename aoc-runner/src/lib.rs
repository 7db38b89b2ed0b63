//! Advent of Code Solution Runner
//!
//! Discovers puzzle solutions laid out on disk by convention and runs them
//! from a line-based menu.
//!
//! # Overview
//!
//! This library provides:
//! - A catalog scanner for `year_<Y>/day_<D>/solution.rs` trees
//! - A trait-based contract for solution units and their entry points
//! - A loader boundary turning catalog entries into capability descriptors
//! - Execution inside the unit's directory, with every failure reported as a value
//! - The interactive year → day → part menu and a non-interactive self-check
//!
//! # Quick Example
//!
//! ```no_run
//! use aoc_runner::{read_input, PartSolver, Runner, SolveError, SolutionUnit};
//!
//! // Lives in <root>/year_2025/day_01/solution.rs
//! #[derive(SolutionUnit)]
//! #[unit(year = "2025", day = "01", parts = [1])]
//! pub struct Solution;
//!
//! impl PartSolver<1> for Solution {
//!     type Answer = usize;
//!
//!     fn solve() -> Result<usize, SolveError> {
//!         Ok(read_input(false)?.lines().count())
//!     }
//! }
//!
//! let runner = Runner::new("puzzles");
//! let years = runner.discover_years();
//! # let _ = years;
//! ```
//!
//! # Key Concepts
//!
//! ## Catalog
//!
//! [`Catalog`] reads the directory tree on every call; directory names are
//! parsed by [`parse_entry_name`]. There is no manifest.
//!
//! ## Units and the loader
//!
//! A unit implements [`PartSolver<1>`](PartSolver) and/or `PartSolver<2>` and
//! registers a [`UnitDescriptor`] with `#[derive(SolutionUnit)]`. The
//! [`UnitLoader`] trait resolves a catalog location to that descriptor; the
//! default [`RegistryLoader`] requires the unit file to exist and exactly one
//! unit to be registered for its year and day.
//!
//! ## Execution
//!
//! [`Runner::execute`] enters the unit's directory through a
//! [`WorkingDirGuard`], calls the entry point and turns errors and panics
//! into [`ExecutionError`]s.
//!
//! ## Menu
//!
//! [`Menu`] drives [`MenuState`] transitions over any `BufRead`/`Write` pair.

mod catalog;
mod check;
mod display;
mod error;
mod menu;
mod registry;
mod runner;
#[cfg(test)]
mod test_support;
mod unit;
mod workdir;

// Re-export public API
pub use catalog::{
    Catalog, DAY_PREFIX, Identifier, UNIT_FILE_NAME, UnitLocation, YEAR_PREFIX, parse_entry_name,
};
pub use check::self_check;
pub use display::{format_duration, format_result, write_options};
pub use error::{ExecutionError, LoadError, MenuError, NameError, SolveError};
pub use menu::{Choice, ExitReason, Menu, MenuState, interpret, match_option};
pub use registry::{RegistryLoader, UnitLoader, UnitPlugin, plugins};
pub use runner::{Execution, Runner, in_entry_point};
pub use unit::{
    EntryPoint, INPUT_FILE, Part, PartSolver, SAMPLE_INPUT_FILE, UnitDescriptor, entry_point,
    read_input,
};
pub use workdir::WorkingDirGuard;

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_runner_macros::SolutionUnit;
