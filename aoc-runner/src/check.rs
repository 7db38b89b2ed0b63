//! Non-interactive self-check
//!
//! Walks the first year, its first day and every part of that day, printing
//! what was found and what each part returned. The output is for a human;
//! it does not decide success or failure.

use crate::display::format_result;
use crate::registry::UnitLoader;
use crate::runner::Runner;
use itertools::Itertools;
use std::io::{self, Write};

pub fn self_check<L: UnitLoader, W: Write>(runner: &Runner<L>, out: &mut W) -> io::Result<()> {
    let years = runner.discover_years();
    writeln!(out, "Available years: [{}]", years.iter().join(", "))?;
    let Some(year) = years.first() else {
        return Ok(());
    };

    let days = runner.discover_days(year);
    writeln!(out, "Available days for {year}: [{}]", days.iter().join(", "))?;
    let Some(day) = days.first() else {
        return Ok(());
    };

    let parts = runner.discover_parts(year, day);
    writeln!(
        out,
        "Available parts for {year} day {day}: [{}]",
        parts.iter().join(", ")
    )?;

    for part in parts {
        writeln!(out)?;
        writeln!(out, "Testing execution of year {year}, day {day}, part {part}:")?;
        writeln!(out, "{}", format_result(&runner.execute(year, day, part)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::test_support::{CatalogFixture, FakeLoader};
    use crate::unit::EntryPoint;

    fn seven() -> Result<String, SolveError> {
        Ok("7".to_string())
    }

    fn broken() -> Result<String, SolveError> {
        Err(SolveError::InvalidInput("no rows".to_string()))
    }

    fn check(fixture: &CatalogFixture, loader: FakeLoader) -> String {
        let runner = Runner::with_loader(fixture.catalog(), loader);
        let mut out = Vec::new();
        self_check(&runner, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_self_check_runs_first_day() {
        let fixture = CatalogFixture::new();
        fixture.add_unit("2025", "01");
        fixture.add_unit("2025", "02");
        fixture.add_day_dir("2024", "09");
        let loader = FakeLoader::default().with("2025", "01", [Some(seven as EntryPoint), Some(broken)]);

        let output = check(&fixture, loader);
        assert!(output.contains("Available years: [2024, 2025]"));
        // first year has a day directory but no unit
        assert!(output.contains("Available days for 2024: [09]"));
        assert!(output.contains("Available parts for 2024 day 09: []"));
        assert!(!output.contains("Testing execution"));
    }

    #[test]
    fn test_self_check_executes_every_part() {
        let fixture = CatalogFixture::new();
        fixture.add_unit("2025", "01");
        let loader = FakeLoader::default().with("2025", "01", [Some(seven as EntryPoint), Some(broken)]);

        let output = check(&fixture, loader);
        assert!(output.contains("Available parts for 2025 day 01: [1, 2]"));
        assert!(output.contains("Testing execution of year 2025, day 01, part 1:\nResult: 7 (solve: "));
        assert!(output.contains(
            "Testing execution of year 2025, day 01, part 2:\nResult: Error executing solution: Invalid input: no rows"
        ));
    }

    #[test]
    fn test_self_check_empty_catalog() {
        let fixture = CatalogFixture::new();
        let output = check(&fixture, FakeLoader::default());
        assert_eq!(output, "Available years: []\n");
    }
}
