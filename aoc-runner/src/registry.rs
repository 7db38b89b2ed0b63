//! Loading solution units
//!
//! Units are compiled into the binary and announce themselves through
//! `inventory`; the catalog on disk decides which of them are reachable. The
//! [`UnitLoader`] trait is the only place where a catalog location is turned
//! into something callable.

use crate::catalog::UnitLocation;
use crate::error::LoadError;
use crate::unit::UnitDescriptor;

/// Plugin record submitted by `#[derive(SolutionUnit)]`
///
/// # Example
///
/// ```no_run
/// use aoc_runner::{entry_point, EntryPoint, PartSolver, SolveError, UnitDescriptor, UnitPlugin};
///
/// struct Day1;
///
/// impl PartSolver<1> for Day1 {
///     type Answer = u32;
///
///     fn solve() -> Result<u32, SolveError> {
///         Ok(1)
///     }
/// }
///
/// aoc_runner::inventory::submit! {
///     UnitPlugin {
///         year: "2025",
///         day: "01",
///         unit: UnitDescriptor::new([Some(entry_point::<Day1, 1> as EntryPoint), None], &["easy"]),
///     }
/// }
/// ```
pub struct UnitPlugin {
    /// Year identifier, as in the `year_<Y>` directory name
    pub year: &'static str,
    /// Day identifier, as in the `day_<D>` directory name
    pub day: &'static str,
    pub unit: UnitDescriptor,
}

inventory::collect!(UnitPlugin);

/// Every unit compiled into the binary
pub fn plugins() -> impl Iterator<Item = &'static UnitPlugin> {
    inventory::iter::<UnitPlugin>.into_iter()
}

/// Turns a catalog location into the unit's capability descriptor
pub trait UnitLoader {
    fn load(&self, location: &UnitLocation) -> Result<UnitDescriptor, LoadError>;
}

/// Loader backed by the units registered through `inventory`
///
/// A unit is loadable when its file exists in the catalog and exactly one
/// registered plugin claims its year and day.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryLoader;

impl UnitLoader for RegistryLoader {
    fn load(&self, location: &UnitLocation) -> Result<UnitDescriptor, LoadError> {
        if !location.file.is_file() {
            return Err(LoadError::Missing {
                path: location.file.clone(),
            });
        }

        let mut matching = plugins()
            .filter(|plugin| location.year == plugin.year && location.day == plugin.day);

        let plugin = matching.next().ok_or_else(|| LoadError::NotRegistered {
            year: location.year.clone(),
            day: location.day.clone(),
        })?;
        if matching.next().is_some() {
            return Err(LoadError::Duplicate {
                year: location.year.clone(),
                day: location.day.clone(),
            });
        }

        Ok(plugin.unit)
    }
}

impl<L: UnitLoader + ?Sized> UnitLoader for &L {
    fn load(&self, location: &UnitLocation) -> Result<UnitDescriptor, LoadError> {
        (**self).load(location)
    }
}
