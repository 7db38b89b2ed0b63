use anyhow::{Context, anyhow};
use aoc_runner::{PartSolver, SolveError, read_input};
use aoc_runner_macros::SolutionUnit;
use itertools::Itertools;
use std::ops::RangeInclusive;

const SAMPLE: bool = false;

#[derive(SolutionUnit)]
#[unit(year = "2025", day = "05", parts = [1, 2], tags = ["ranges"])]
pub struct Solution;

impl PartSolver<1> for Solution {
    type Answer = usize;

    fn solve() -> Result<usize, SolveError> {
        let database = database()?;
        let fresh = merge(database.fresh);
        Ok(database
            .ingredients
            .iter()
            .filter(|id| fresh.iter().any(|range| range.contains(*id)))
            .count())
    }
}

impl PartSolver<2> for Solution {
    type Answer = u64;

    fn solve() -> Result<u64, SolveError> {
        fresh_count(&merge(database()?.fresh))
            .ok_or_else(|| SolveError::InvalidInput("fresh ranges cover more ids than fit in u64".to_string()))
    }
}

#[derive(Debug)]
struct Database {
    fresh: Vec<RangeInclusive<u64>>,
    ingredients: Vec<u64>,
}

fn database() -> Result<Database, SolveError> {
    parse(&read_input(SAMPLE)?).map_err(|e| SolveError::InvalidInput(format!("{e:#}")))
}

/// Fresh ranges (`3-5`), a blank line, then ingredient ids
fn parse(input: &str) -> anyhow::Result<Database> {
    let normalized = input.trim().replace("\r\n", "\n");
    let (ranges, ids) = normalized
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("missing blank line between ranges and ids"))?;

    let fresh = ranges
        .lines()
        .map(|line| -> anyhow::Result<RangeInclusive<u64>> {
            let (start, end) = line
                .split_once('-')
                .ok_or_else(|| anyhow!("range '{}' has no '-'", line))?;
            let start = start.trim().parse::<u64>().with_context(|| format!("range '{line}'"))?;
            let end = end.trim().parse::<u64>().with_context(|| format!("range '{line}'"))?;
            Ok(start..=end)
        })
        .collect::<anyhow::Result<_>>()?;

    let ingredients = ids
        .lines()
        .map(|line| line.trim().parse::<u64>().with_context(|| format!("ingredient '{line}'")))
        .collect::<anyhow::Result<_>>()?;

    Ok(Database { fresh, ingredients })
}

/// Sort and merge overlapping ranges; the result is disjoint and ascending
fn merge(ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges
        .into_iter()
        .filter(|range| !range.is_empty())
        .sorted_by_key(|range| (*range.start(), *range.end()))
        .coalesce(|previous, next| {
            if next.start() <= previous.end() {
                Ok(*previous.start()..=*previous.end().max(next.end()))
            } else {
                Err((previous, next))
            }
        })
        .collect()
}

/// Ids covered by disjoint non-empty ranges; `None` if the count overflows
fn fresh_count(ranges: &[RangeInclusive<u64>]) -> Option<u64> {
    ranges.iter().try_fold(0u64, |total, range| {
        (range.end() - range.start()).checked_add(1)?.checked_add(total)
    })
}
