use anyhow::{anyhow, ensure};
use aoc_runner::{PartSolver, SolveError, read_input};
use aoc_runner_macros::SolutionUnit;
use itertools::Itertools;

const SAMPLE: bool = false;
/// A roll is reachable when fewer than this many rolls surround it
const MAX_NEIGHBOURS: usize = 4;

#[derive(SolutionUnit)]
#[unit(year = "2025", day = "04", parts = [1, 2], tags = ["grid"])]
pub struct Solution;

impl PartSolver<1> for Solution {
    type Answer = usize;

    fn solve() -> Result<usize, SolveError> {
        let mut grid = grid()?;
        Ok(grid.remove_reachable())
    }
}

impl PartSolver<2> for Solution {
    type Answer = usize;

    fn solve() -> Result<usize, SolveError> {
        let mut grid = grid()?;
        Ok(std::iter::from_fn(|| Some(grid.remove_reachable()).filter(|&removed| removed > 0)).sum())
    }
}

fn grid() -> Result<Grid, SolveError> {
    Grid::parse(&read_input(SAMPLE)?).map_err(|e| SolveError::InvalidInput(e.to_string()))
}

/// Paper rolls (`@`) on a rectangular floor plan
#[derive(Debug, Clone, PartialEq, Eq)]
struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let rows: Vec<Vec<bool>> = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> anyhow::Result<Vec<bool>> {
                line.chars()
                    .map(|c| match c {
                        '@' => Ok(true),
                        '.' => Ok(false),
                        other => Err(anyhow!("(line {}) unexpected '{}'", line_idx + 1, other)),
                    })
                    .collect()
            })
            .collect::<anyhow::Result<_>>()?;
        ensure!(
            rows.iter().map(Vec::len).all_equal(),
            "rows have different lengths"
        );
        Ok(Self { rows })
    }

    fn neighbours(&self, row: usize, col: usize) -> usize {
        (row.saturating_sub(1)..=row + 1)
            .cartesian_product(col.saturating_sub(1)..=col + 1)
            .filter(|&cell| cell != (row, col))
            .filter(|&(r, c)| self.rows.get(r).and_then(|cells| cells.get(c)) == Some(&true))
            .count()
    }

    /// Remove every roll that is reachable right now; returns how many
    fn remove_reachable(&mut self) -> usize {
        let reachable: Vec<(usize, usize)> = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(r, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|&(_, &roll)| roll)
                    .map(move |(c, _)| (r, c))
            })
            .filter(|&(r, c)| self.neighbours(r, c) < MAX_NEIGHBOURS)
            .collect();

        for &(r, c) in &reachable {
            self.rows[r][c] = false;
        }
        reachable.len()
    }
}
