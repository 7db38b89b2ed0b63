//! Interactive year → day → part menu
//!
//! The session is an explicit state machine:
//!
//! ```text
//! SelectYear ──year──▶ SelectDay ──day──▶ SelectPart ──part──▶ (run, SelectPart)
//!     ▲                   │  ▲               │
//!     └──────back─────────┘  └─────back──────┘
//! ```
//!
//! `exit` ends the session from any prompt. Running out of years ends it too;
//! running out of days or parts only unwinds one level.

use crate::catalog::Identifier;
use crate::display::{format_result, write_options};
use crate::error::MenuError;
use crate::registry::UnitLoader;
use crate::runner::Runner;
use itertools::Itertools;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::debug;

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    SelectYear,
    SelectDay { year: Identifier },
    SelectPart { year: Identifier, day: Identifier },
    Exit(ExitReason),
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `exit` was entered, or input ran out
    UserExit,
    /// The catalog has no years at all
    EmptyCatalog,
}

/// A line of user input, interpreted against the options on offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Selected(T),
    Back,
    Exit,
}

/// Interpret one line of input
///
/// Returns `None` when the input matches neither a command nor an option.
/// `back` is only a command when `allow_back` is set.
pub fn interpret<T: Clone + Display>(input: &str, options: &[T], allow_back: bool) -> Option<Choice<T>> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("exit") {
        return Some(Choice::Exit);
    }
    if allow_back && input.eq_ignore_ascii_case("back") {
        return Some(Choice::Back);
    }
    match_option(input, options).cloned().map(Choice::Selected)
}

/// Find the option named by `input`
///
/// Matching ignores case and surrounding whitespace. When nothing matches
/// verbatim, the input zero-padded to two digits is tried, so `1` selects
/// `01`.
///
/// ```
/// use aoc_runner::match_option;
///
/// let days = ["01", "03", "12"];
/// assert_eq!(match_option("3", &days), Some(&"03"));
/// assert_eq!(match_option("12", &days), Some(&"12"));
/// assert_eq!(match_option("2", &days), None);
/// ```
pub fn match_option<'a, T: Display>(input: &str, options: &'a [T]) -> Option<&'a T> {
    let input = input.trim();
    let find = |needle: &str| {
        options
            .iter()
            .find(|option| option.to_string().eq_ignore_ascii_case(needle))
    };
    find(input).or_else(|| find(&format!("{input:0>2}")))
}

/// Line-based menu over a runner
///
/// Reads answers from `input` and writes everything to `output`, so a
/// session can be driven from a script as well as from a terminal.
pub struct Menu<'r, L, R, W> {
    runner: &'r Runner<L>,
    input: R,
    output: W,
}

impl<'r, L: UnitLoader, R: BufRead, W: Write> Menu<'r, L, R, W> {
    pub fn new(runner: &'r Runner<L>, input: R, output: W) -> Self {
        Self {
            runner,
            input,
            output,
        }
    }

    /// Run a whole session, starting from year selection
    pub fn run(&mut self) -> Result<ExitReason, MenuError> {
        writeln!(self.output, "Welcome to Advent of Code Solution Runner!")?;
        let mut state = MenuState::SelectYear;
        loop {
            state = self.step(state)?;
            if let MenuState::Exit(reason) = state {
                debug!(?reason, "menu session ended");
                return Ok(reason);
            }
        }
    }

    /// Show the menu for `state` and return the state the answer leads to
    pub fn step(&mut self, state: MenuState) -> Result<MenuState, MenuError> {
        match state {
            MenuState::SelectYear => self.year_menu(),
            MenuState::SelectDay { year } => self.day_menu(year),
            MenuState::SelectPart { year, day } => self.part_menu(year, day),
            exit @ MenuState::Exit(_) => Ok(exit),
        }
    }

    /// Give back the output sink, e.g. to inspect a scripted session
    pub fn into_output(self) -> W {
        self.output
    }

    fn year_menu(&mut self) -> Result<MenuState, MenuError> {
        let years = self.runner.discover_years();
        if years.is_empty() {
            writeln!(self.output, "No years found in the project directory.")?;
            return Ok(MenuState::Exit(ExitReason::EmptyCatalog));
        }

        write_options(&mut self.output, "Select Year", &years)?;
        Ok(match self.prompt("Enter year", &years, false)? {
            Choice::Selected(year) => MenuState::SelectDay { year },
            Choice::Back => MenuState::SelectYear,
            Choice::Exit => MenuState::Exit(ExitReason::UserExit),
        })
    }

    fn day_menu(&mut self, year: Identifier) -> Result<MenuState, MenuError> {
        let days = self.runner.discover_days(&year);
        if days.is_empty() {
            writeln!(self.output, "No days found for year {year}.")?;
            return Ok(MenuState::SelectYear);
        }

        write_options(&mut self.output, &format!("Year {year} - Select Day"), &days)?;
        Ok(match self.prompt("Enter day", &days, true)? {
            Choice::Selected(day) => MenuState::SelectPart { year, day },
            Choice::Back => MenuState::SelectYear,
            Choice::Exit => MenuState::Exit(ExitReason::UserExit),
        })
    }

    fn part_menu(&mut self, year: Identifier, day: Identifier) -> Result<MenuState, MenuError> {
        let parts = self.runner.discover_parts(&year, &day);
        if parts.is_empty() {
            writeln!(
                self.output,
                "No solution parts found for year {year}, day {day}."
            )?;
            return Ok(MenuState::SelectDay { year });
        }

        write_options(
            &mut self.output,
            &format!("Year {year}, Day {day} - Select Part"),
            &parts,
        )?;
        let part = match self.prompt("Enter part", &parts, true)? {
            Choice::Selected(part) => part,
            Choice::Back => return Ok(MenuState::SelectDay { year }),
            Choice::Exit => return Ok(MenuState::Exit(ExitReason::UserExit)),
        };

        writeln!(self.output)?;
        writeln!(self.output, "Executing Year {year}, Day {day}, Part {part}...")?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        let result = self.runner.execute(&year, &day, part);
        writeln!(self.output, "{}", format_result(&result))?;

        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        if self.read_line()?.is_none() {
            return Ok(MenuState::Exit(ExitReason::UserExit));
        }
        Ok(MenuState::SelectPart { year, day })
    }

    /// Ask until the answer is a command or one of `options`
    fn prompt<T: Clone + Display>(
        &mut self,
        prompt: &str,
        options: &[T],
        allow_back: bool,
    ) -> Result<Choice<T>, MenuError> {
        let commands = if allow_back {
            "(or 'back' to go back, 'exit' to quit)"
        } else {
            "(or 'exit' to quit)"
        };

        loop {
            write!(self.output, "\n{prompt} {commands}: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Choice::Exit);
            };
            if let Some(choice) = interpret(&line, options, allow_back) {
                return Ok(choice);
            }
            writeln!(
                self.output,
                "Invalid choice. Available options: {}",
                options.iter().join(", ")
            )?;
        }
    }

    /// `None` once the input is exhausted
    fn read_line(&mut self) -> Result<Option<String>, MenuError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
