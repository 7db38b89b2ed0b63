//! Catalog listing for `--list`

use aoc_runner::{Runner, UnitLoader};
use itertools::Itertools;
use std::io::{self, Write};

/// Print one line per day on disk: its parts and tags, or why it did not load
pub fn write_listing<L: UnitLoader, W: Write>(runner: &Runner<L>, out: &mut W) -> io::Result<()> {
    let years = runner.discover_years();
    if years.is_empty() {
        return writeln!(out, "No years found in {}", runner.catalog().root().display());
    }

    for year in &years {
        for day in runner.discover_days(year) {
            match runner.load(year, &day) {
                Ok(unit) => {
                    let tags = match unit.tags() {
                        [] => String::new(),
                        tags => format!(" [{}]", tags.iter().join(", ")),
                    };
                    writeln!(
                        out,
                        "{year}/{day}: parts {}{tags}",
                        unit.parts().iter().join(", ")
                    )?;
                }
                Err(e) => writeln!(out, "{year}/{day}: {e}")?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_listing_reports_each_day() {
        let temp = TempDir::new().unwrap();
        let year = temp.path().join("year_2025");
        fs::create_dir_all(year.join("day_01")).unwrap();
        fs::write(year.join("day_01").join("solution.rs"), "").unwrap();
        fs::create_dir_all(year.join("day_02")).unwrap();
        fs::write(year.join("day_02").join("solution.rs"), "").unwrap();
        fs::create_dir_all(year.join("day_07")).unwrap();

        let runner = Runner::new(temp.path());
        let mut out = Vec::new();
        write_listing(&runner, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "2025/01: parts 1, 2 [dial]");
        assert_eq!(lines[1], "2025/02: no solution unit is registered for year 2025 day 02");
        assert!(lines[2].starts_with("2025/07: solution unit "));
        assert!(lines[2].ends_with("does not exist"));
    }

    #[test]
    fn test_listing_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let runner = Runner::new(temp.path());
        let mut out = Vec::new();
        write_listing(&runner, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("No years found in "));
    }
}
