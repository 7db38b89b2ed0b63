use anyhow::anyhow;
use aoc_runner::{PartSolver, SolveError, read_input};
use aoc_runner_macros::SolutionUnit;
use std::str::FromStr;

const SAMPLE: bool = false;
const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;

#[derive(SolutionUnit)]
#[unit(year = "2025", day = "01", parts = [1, 2], tags = ["dial"])]
pub struct Solution;

impl PartSolver<1> for Solution {
    type Answer = usize;

    fn solve() -> Result<usize, SolveError> {
        Ok(count_zero_stops(&rotations()?))
    }
}

impl PartSolver<2> for Solution {
    type Answer = u32;

    fn solve() -> Result<u32, SolveError> {
        Ok(count_zero_passes(&rotations()?))
    }
}

fn rotations() -> Result<Vec<i32>, SolveError> {
    parse(&read_input(SAMPLE)?).map_err(|e| SolveError::InvalidInput(e.to_string()))
}

/// `L68` is -68, `R48` is 48
fn parse(input: &str) -> anyhow::Result<Vec<i32>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| -> anyhow::Result<i32> {
            let negative = match line.as_bytes().first() {
                Some(b'L') => true,
                Some(b'R') => false,
                _ => return Err(anyhow!("(line {}) first character need to be 'L' or 'R'", line_idx + 1)),
            };
            let distance = <i32 as FromStr>::from_str(&line[1..])
                .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
            if distance < 0 {
                return Err(anyhow!("(line {}) rotate value must be non negative", line_idx + 1));
            }
            Ok(if negative { -distance } else { distance })
        })
        .collect()
}

/// Number of rotations that leave the dial at 0
fn count_zero_stops(rotations: &[i32]) -> usize {
    rotations
        .iter()
        .scan(DIAL_START, |dial, rotation| {
            *dial = (*dial + rotation).rem_euclid(DIAL_SIZE);
            Some(*dial)
        })
        .filter(|&dial| dial == 0)
        .count()
}

/// Number of times the dial points at 0, including while turning
fn count_zero_passes(rotations: &[i32]) -> u32 {
    let (_, passes) = rotations
        .iter()
        .fold((DIAL_START, 0u32), |(dial, passes), rotation| {
            let unwrapped = dial + rotation;
            let mut passes = passes + (unwrapped / DIAL_SIZE).unsigned_abs();
            // turning left from a non-zero position onto or past 0
            if dial != 0 && unwrapped <= 0 {
                passes += 1;
            }
            (unwrapped.rem_euclid(DIAL_SIZE), passes)
        });
    passes
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_INPUT: &str = include_str!("sample_input.txt");

    #[test]
    fn test_parse() {
        assert_eq!(parse("L68\nR48\nL5").unwrap(), vec![-68, 48, -5]);
        assert!(parse("X3").is_err());
        assert!(parse("L").is_err());
        assert!(parse("R-4").is_err());
    }

    #[test]
    fn test_sample() {
        let rotations = parse(SAMPLE_INPUT).unwrap();
        assert_eq!(count_zero_stops(&rotations), 3);
        assert_eq!(count_zero_passes(&rotations), 6);
    }

    #[test]
    fn test_full_turns_pass_zero_each_time() {
        assert_eq!(count_zero_passes(&[1000]), 10);
        assert_eq!(count_zero_passes(&[-250]), 3);
        // starting on 0 and turning left does not count the start
        assert_eq!(count_zero_passes(&[-50, -5]), 1);
    }
}
