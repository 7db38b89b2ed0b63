//! Solution unit contract: parts, entry points and capability descriptors

use crate::error::SolveError;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Primary puzzle input, read relative to the unit's directory
pub const INPUT_FILE: &str = "input.txt";
/// Example input from the puzzle text
pub const SAMPLE_INPUT_FILE: &str = "sample_input.txt";

/// One of the two recognized entry points of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Every recognized part, in canonical order
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub const fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    pub const fn from_number(number: u8) -> Option<Part> {
        match number {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            _ => None,
        }
    }

    /// Name of the entry point implementing this part
    pub const fn entry_point_name(self) -> &'static str {
        match self {
            Part::One => "part_1",
            Part::Two => "part_2",
        }
    }

    const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Part::from_number)
            .ok_or_else(|| format!("'{s}' is not a part (expected 1 or 2)"))
    }
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number. The solver takes no arguments:
/// it reads its own input, relative to the working directory the runner sets
/// up, and returns any printable answer.
///
/// # Example
///
/// ```
/// use aoc_runner::{PartSolver, SolveError};
///
/// struct Day1;
///
/// impl PartSolver<1> for Day1 {
///     type Answer = u32;
///
///     fn solve() -> Result<u32, SolveError> {
///         Ok(42)
///     }
/// }
/// ```
pub trait PartSolver<const N: u8> {
    /// The answer printed by the runner
    type Answer: fmt::Display;

    fn solve() -> Result<Self::Answer, SolveError>;
}

/// Type-erased entry point: a zero-argument call producing the rendered answer
pub type EntryPoint = fn() -> Result<String, SolveError>;

/// Erase `S`'s part `N` into an [`EntryPoint`]
///
/// The answer is rendered with its `Display` impl and otherwise untouched.
pub fn entry_point<S: PartSolver<N>, const N: u8>() -> Result<String, SolveError> {
    S::solve().map(|answer| answer.to_string())
}

/// Capability descriptor of a loaded unit: which entry points it exposes
///
/// Built at compile time by `#[derive(SolutionUnit)]`.
#[derive(Debug, Clone, Copy)]
pub struct UnitDescriptor {
    entry_points: [Option<EntryPoint>; 2],
    tags: &'static [&'static str],
}

impl UnitDescriptor {
    /// `entry_points[0]` is part 1, `entry_points[1]` part 2
    pub const fn new(entry_points: [Option<EntryPoint>; 2], tags: &'static [&'static str]) -> Self {
        Self { entry_points, tags }
    }

    /// Parts this unit exposes, in canonical order
    pub fn parts(&self) -> Vec<Part> {
        Part::ALL
            .into_iter()
            .filter(|part| self.entry_point(*part).is_some())
            .collect()
    }

    pub fn entry_point(&self, part: Part) -> Option<EntryPoint> {
        self.entry_points[part.index()]
    }

    /// Free-form tags, e.g. `"grid"` or `"wip"`
    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

/// Read the unit's input file from the working directory
///
/// Reads [`SAMPLE_INPUT_FILE`] when `sample` is set, [`INPUT_FILE`] otherwise.
pub fn read_input(sample: bool) -> Result<String, SolveError> {
    let path = PathBuf::from(if sample { SAMPLE_INPUT_FILE } else { INPUT_FILE });
    fs::read_to_string(&path).map_err(|source| SolveError::ReadInput { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl PartSolver<1> for Fixed {
        type Answer = i64;

        fn solve() -> Result<i64, SolveError> {
            Ok(-17)
        }
    }

    impl PartSolver<2> for Fixed {
        type Answer = &'static str;

        fn solve() -> Result<&'static str, SolveError> {
            Err(SolveError::InvalidInput("empty".to_string()))
        }
    }

    #[test]
    fn test_part_numbers_and_names() {
        assert_eq!(Part::ALL, [Part::One, Part::Two]);
        assert_eq!(Part::One.entry_point_name(), "part_1");
        assert_eq!(Part::Two.entry_point_name(), "part_2");
        assert_eq!(Part::from_number(2), Some(Part::Two));
        assert_eq!(Part::from_number(0), None);
        assert_eq!(Part::from_number(3), None);
        assert_eq!("1".parse::<Part>(), Ok(Part::One));
        assert!("01x".parse::<Part>().is_err());
        assert_eq!(Part::Two.to_string(), "2");
    }

    #[test]
    fn test_descriptor_parts_in_canonical_order() {
        let both = UnitDescriptor::new(
            [
                Some(entry_point::<Fixed, 1> as EntryPoint),
                Some(entry_point::<Fixed, 2> as EntryPoint),
            ],
            &[],
        );
        assert_eq!(both.parts(), vec![Part::One, Part::Two]);

        let second_only = UnitDescriptor::new([None, Some(entry_point::<Fixed, 2> as EntryPoint)], &["wip"]);
        assert_eq!(second_only.parts(), vec![Part::Two]);
        assert!(second_only.entry_point(Part::One).is_none());
        assert_eq!(second_only.tags(), &["wip"]);

        let none = UnitDescriptor::new([None, None], &[]);
        assert!(none.parts().is_empty());
    }

    #[test]
    fn test_entry_point_renders_answer() {
        assert_eq!(entry_point::<Fixed, 1>().unwrap(), "-17");
        assert!(matches!(
            entry_point::<Fixed, 2>(),
            Err(SolveError::InvalidInput(_))
        ));
    }
}
