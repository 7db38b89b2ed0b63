//! Discovery of parts and execution of entry points

use crate::catalog::{Catalog, Identifier, UnitLocation};
use crate::error::{ExecutionError, LoadError};
use crate::registry::{RegistryLoader, UnitLoader};
use crate::unit::{Part, UnitDescriptor};
use crate::workdir::WorkingDirGuard;
use chrono::{DateTime, TimeDelta, Utc};
use std::any::Any;
use std::cell::Cell;
use std::panic;
use tracing::{debug, info};

thread_local! {
    static IN_ENTRY_POINT: Cell<bool> = const { Cell::new(false) };
}

/// Whether this thread is currently inside an entry point called by
/// [`Runner::execute`]
///
/// Lets a panic hook tell panics the runner will report from ones that
/// end the process.
pub fn in_entry_point() -> bool {
    IN_ENTRY_POINT.with(Cell::get)
}

/// Answer produced by one entry point call, with timing
#[derive(Debug, Clone)]
pub struct Execution {
    pub year: Identifier,
    pub day: Identifier,
    pub part: Part,
    /// The entry point's answer, rendered with `Display`
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl Execution {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Catalog plus the loader that turns its entries into callable units
///
/// # Example
///
/// ```no_run
/// use aoc_runner::{Identifier, Part, Runner};
///
/// let runner = Runner::new("puzzles");
/// for year in runner.discover_years() {
///     println!("{year}: {:?}", runner.discover_days(&year));
/// }
///
/// let year: Identifier = "2025".parse()?;
/// let day: Identifier = "01".parse()?;
/// match runner.execute(&year, &day, Part::One) {
///     Ok(execution) => println!("{}", execution.answer),
///     Err(e) => println!("{e}"),
/// }
/// # Ok::<(), aoc_runner::NameError>(())
/// ```
pub struct Runner<L = RegistryLoader> {
    catalog: Catalog,
    loader: L,
}

impl Runner<RegistryLoader> {
    /// Runner over the units compiled into this binary
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self::with_loader(Catalog::new(root), RegistryLoader)
    }
}

impl<L: UnitLoader> Runner<L> {
    pub fn with_loader(catalog: Catalog, loader: L) -> Self {
        Self { catalog, loader }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn discover_years(&self) -> Vec<Identifier> {
        self.catalog.discover_years()
    }

    pub fn discover_days(&self, year: &Identifier) -> Vec<Identifier> {
        self.catalog.discover_days(year)
    }

    /// Load the unit for `year`/`day`
    pub fn load(&self, year: &Identifier, day: &Identifier) -> Result<UnitDescriptor, LoadError> {
        self.loader.load(&self.catalog.unit_location(year, day))
    }

    /// Parts exposed by the unit for `year`/`day`, in canonical order
    ///
    /// Best effort: a missing unit or a failed load gives an empty list.
    pub fn discover_parts(&self, year: &Identifier, day: &Identifier) -> Vec<Part> {
        match self.load(year, day) {
            Ok(unit) => unit.parts(),
            Err(e) => {
                debug!(%year, %day, error = %e, "no parts: unit did not load");
                Vec::new()
            }
        }
    }

    /// Run one entry point inside the unit's directory
    ///
    /// Load failures, a missing entry point, errors returned by the entry
    /// point and panics raised by it all come back as [`ExecutionError`].
    /// The working directory is restored before this returns.
    pub fn execute(
        &self,
        year: &Identifier,
        day: &Identifier,
        part: Part,
    ) -> Result<Execution, ExecutionError> {
        let UnitLocation { dir, .. } = self.catalog.unit_location(year, day);
        let unit = self.load(year, day)?;
        let entry_point = unit
            .entry_point(part)
            .ok_or(ExecutionError::EntryPointNotFound(part.entry_point_name()))?;

        info!(%year, %day, %part, "executing solution");
        let (outcome, solve_start, solve_end) = {
            let _guard = WorkingDirGuard::enter(&dir)
                .map_err(|source| ExecutionError::WorkingDir { path: dir, source })?;
            let solve_start = Utc::now();
            IN_ENTRY_POINT.with(|flag| flag.set(true));
            let outcome = panic::catch_unwind(entry_point);
            IN_ENTRY_POINT.with(|flag| flag.set(false));
            (outcome, solve_start, Utc::now())
        };

        let answer = outcome.map_err(|payload| ExecutionError::Panicked(panic_message(&*payload)))??;
        Ok(Execution {
            year: year.clone(),
            day: day.clone(),
            part,
            answer,
            solve_start,
            solve_end,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
