//! Text rendering for menus and results

use crate::error::ExecutionError;
use crate::runner::Execution;
use chrono::TimeDelta;
use itertools::Itertools;
use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 40;

/// Print a boxed menu title followed by the options on offer
pub fn write_options<W: Write, T: Display>(out: &mut W, title: &str, options: &[T]) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{title:^width$}", width = RULE_WIDTH)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Available: {}", options.iter().join(", "))
}

/// `Result: <answer> (solve: <time>)`, or `Result: <error message>`
pub fn format_result(result: &Result<Execution, ExecutionError>) -> String {
    match result {
        Ok(execution) => format!(
            "Result: {} (solve: {})",
            execution.answer,
            format_duration(execution.duration())
        ),
        Err(e) => format!("Result: {e}"),
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
