//! Catalog fixtures and a fake loader for unit tests

use crate::catalog::{Catalog, Identifier, UnitLocation, DAY_PREFIX, UNIT_FILE_NAME, YEAR_PREFIX};
use crate::error::LoadError;
use crate::registry::UnitLoader;
use crate::unit::{EntryPoint, UnitDescriptor};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn id(value: &str) -> Identifier {
    Identifier::new(value).expect("valid identifier")
}

/// Temporary catalog root with `year_*/day_*` directories
pub struct CatalogFixture {
    root: TempDir,
}

impl CatalogFixture {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.root.path())
    }

    pub fn add_day_dir(&self, year: &str, day: &str) -> PathBuf {
        let dir = self
            .root
            .path()
            .join(format!("{YEAR_PREFIX}{year}"))
            .join(format!("{DAY_PREFIX}{day}"));
        fs::create_dir_all(&dir).expect("create day dir");
        dir
    }

    /// Day directory with a unit file in it
    pub fn add_unit(&self, year: &str, day: &str) -> PathBuf {
        let dir = self.add_day_dir(year, day);
        fs::write(dir.join(UNIT_FILE_NAME), "// unit\n").expect("write unit file");
        dir
    }

    pub fn write(&self, year: &str, day: &str, name: &str, contents: &str) {
        let dir = self.add_day_dir(year, day);
        fs::write(dir.join(name), contents).expect("write fixture file");
    }
}

/// Loader with a fixed table of units, honoring the unit file on disk
#[derive(Default)]
pub struct FakeLoader {
    units: HashMap<(String, String), UnitDescriptor>,
}

impl FakeLoader {
    pub fn with(mut self, year: &str, day: &str, entry_points: [Option<EntryPoint>; 2]) -> Self {
        self.units.insert(
            (year.to_string(), day.to_string()),
            UnitDescriptor::new(entry_points, &[]),
        );
        self
    }
}

impl UnitLoader for FakeLoader {
    fn load(&self, location: &UnitLocation) -> Result<UnitDescriptor, LoadError> {
        if !location.file.is_file() {
            return Err(LoadError::Missing {
                path: location.file.clone(),
            });
        }
        self.units
            .get(&(location.year.to_string(), location.day.to_string()))
            .copied()
            .ok_or_else(|| LoadError::NotRegistered {
                year: location.year.clone(),
                day: location.day.clone(),
            })
    }
}
