//! On-disk catalog of solution units
//!
//! The catalog is a directory tree, not a manifest:
//!
//! ```text
//! <root>/year_<Y>/day_<D>/solution.rs
//! ```
//!
//! Directory names are turned into [`Identifier`]s by [`parse_entry_name`],
//! which only strips the prefix. Every discovery call reads the filesystem
//! again, so units added while the runner is open show up on the next menu.

use crate::error::NameError;
use itertools::Itertools;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Prefix of year directories under the catalog root
pub const YEAR_PREFIX: &str = "year_";
/// Prefix of day directories under a year directory
pub const DAY_PREFIX: &str = "day_";
/// File name of the solution unit inside a day directory
pub const UNIT_FILE_NAME: &str = "solution.rs";

/// A year or day key as it appears in the catalog, e.g. `2025` or `01`
///
/// Identifiers are opaque: they are shown to the user and matched verbatim,
/// and they order lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate a raw identifier
    ///
    /// The value must be non-empty and usable as a single path component.
    pub fn new(value: impl Into<String>) -> Result<Self, NameError> {
        let value = value.into();
        let usable = !value.is_empty()
            && value != "."
            && value != ".."
            && !value.contains(['/', '\\']);
        if usable {
            Ok(Self(value))
        } else {
            Err(NameError::Invalid(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Parse a catalog directory name by stripping `prefix`
///
/// # Example
///
/// ```
/// use aoc_runner::{parse_entry_name, DAY_PREFIX};
///
/// let day = parse_entry_name(DAY_PREFIX, "day_01").unwrap();
/// assert_eq!(day.as_str(), "01");
/// assert!(parse_entry_name(DAY_PREFIX, "notes").is_err());
/// ```
pub fn parse_entry_name(prefix: &'static str, name: &str) -> Result<Identifier, NameError> {
    let rest = name
        .strip_prefix(prefix)
        .ok_or_else(|| NameError::MissingPrefix {
            prefix,
            name: name.to_string(),
        })?;
    if rest.is_empty() {
        return Err(NameError::Empty {
            prefix,
            name: name.to_string(),
        });
    }
    Identifier::new(rest)
}

/// Where a (year, day) unit lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLocation {
    pub year: Identifier,
    pub day: Identifier,
    /// The day directory; solutions run with this as working directory
    pub dir: PathBuf,
    /// The unit file inside `dir`
    pub file: PathBuf,
}

/// Read-only view of the catalog tree under a root directory
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Years found under the root, ascending
    ///
    /// A missing or unreadable root yields an empty list.
    pub fn discover_years(&self) -> Vec<Identifier> {
        scan(&self.root, YEAR_PREFIX)
    }

    /// Days found under `year_<year>`, ascending
    ///
    /// A year without a directory yields an empty list.
    pub fn discover_days(&self, year: &Identifier) -> Vec<Identifier> {
        scan(&self.year_dir(year), DAY_PREFIX)
    }

    /// Location of the unit for `year`/`day`; nothing is checked on disk
    pub fn unit_location(&self, year: &Identifier, day: &Identifier) -> UnitLocation {
        let dir = self.year_dir(year).join(format!("{DAY_PREFIX}{day}"));
        UnitLocation {
            year: year.clone(),
            day: day.clone(),
            file: dir.join(UNIT_FILE_NAME),
            dir,
        }
    }

    fn year_dir(&self, year: &Identifier) -> PathBuf {
        self.root.join(format!("{YEAR_PREFIX}{year}"))
    }
}

/// List the identifiers of the subdirectories of `dir` named `<prefix><id>`
fn scan(dir: &Path, prefix: &'static str) -> Vec<Identifier> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "catalog directory not readable");
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name();
            let name = name.to_str()?;
            parse_entry_name(prefix, name)
                .inspect_err(|e| debug!(dir = %dir.display(), error = %e, "skipping entry"))
                .ok()
        })
        .sorted()
        .dedup()
        .collect()
}
