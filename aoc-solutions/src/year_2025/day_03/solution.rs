use anyhow::anyhow;
use aoc_runner::{PartSolver, SolveError, read_input};
use aoc_runner_macros::SolutionUnit;

const SAMPLE: bool = false;

#[derive(SolutionUnit)]
#[unit(year = "2025", day = "03", parts = [1, 2], tags = ["greedy"])]
pub struct Solution;

impl PartSolver<1> for Solution {
    type Answer = u64;

    fn solve() -> Result<u64, SolveError> {
        total_joltage(&banks()?, 2)
    }
}

impl PartSolver<2> for Solution {
    type Answer = u64;

    fn solve() -> Result<u64, SolveError> {
        total_joltage(&banks()?, 12)
    }
}

fn banks() -> Result<Vec<Vec<u8>>, SolveError> {
    parse(&read_input(SAMPLE)?).map_err(|e| SolveError::InvalidInput(e.to_string()))
}

/// One bank of battery ratings per line
fn parse(input: &str) -> anyhow::Result<Vec<Vec<u8>>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| -> anyhow::Result<Vec<u8>> {
            line.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| anyhow!("(line {}) '{}' is not a digit", line_idx + 1, c))
                })
                .collect()
        })
        .collect()
}

fn total_joltage(banks: &[Vec<u8>], batteries: usize) -> Result<u64, SolveError> {
    banks
        .iter()
        .map(|bank| {
            best_joltage(bank, batteries).ok_or_else(|| {
                SolveError::InvalidInput(format!(
                    "bank of {} batteries cannot turn on {}",
                    bank.len(),
                    batteries
                ))
            })
        })
        .sum()
}

/// Largest number formed by `batteries` digits of `bank`, kept in order
fn best_joltage(bank: &[u8], batteries: usize) -> Option<u64> {
    if batteries == 0 || bank.len() < batteries {
        return None;
    }

    let mut start = 0;
    let mut joltage = 0u64;
    for remaining in (0..batteries).rev() {
        let window = &bank[start..bank.len() - remaining];
        // leftmost maximum, so later picks keep the most room
        let (offset, digit) = window
            .iter()
            .copied()
            .enumerate()
            .rev()
            .max_by_key(|&(_, digit)| digit)?;
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(joltage)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_INPUT: &str = include_str!("sample_input.txt");

    #[test]
    fn test_best_joltage() {
        assert_eq!(best_joltage(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1], 2), Some(98));
        assert_eq!(best_joltage(&[8, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 9], 2), Some(89));
        assert_eq!(best_joltage(&[1, 2], 3), None);
    }

    #[test]
    fn test_sample() {
        let banks = parse(SAMPLE_INPUT).unwrap();
        assert_eq!(total_joltage(&banks, 2).unwrap(), 357);
        assert_eq!(total_joltage(&banks, 12).unwrap(), 3121910778619);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(parse("12a4").is_err());
    }
}
