//! Advent of Code puzzle solutions, laid out as a runner catalog
//!
//! Each day lives in `src/year_<Y>/day_<D>/solution.rs` next to its input
//! files and registers itself with `#[derive(SolutionUnit)]`. The runner
//! walks [`CATALOG_ROOT`] to find them.

/// Catalog root: this crate's `src` directory
pub const CATALOG_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

pub mod year_2025;
