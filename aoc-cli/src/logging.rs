//! Diagnostics on stderr, kept apart from the menu on stdout

use crate::error::CliError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber with `level` as the filter directive
///
/// Output: stderr, compact format.
pub fn init(level: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| CliError::Config(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Send reports of panics inside solutions to the log instead of printing
/// them over the menu
///
/// The runner catches those and shows their message as the result, so the
/// report itself is only interesting when debugging. Any other panic ends the
/// process and still goes through the previous hook.
pub fn route_panics() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if aoc_runner::in_entry_point() {
            tracing::debug!(panic = %info, "solution panicked");
        } else {
            previous(info);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{
        Catalog, EntryPoint, Identifier, LoadError, Part, Runner, SolveError, UnitDescriptor,
        UnitLoader, UnitLocation,
    };
    use std::panic;
    use std::sync::Mutex;

    static REACHED_PREVIOUS_HOOK: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn panicking_part() -> Result<String, SolveError> {
        panic!("marker: inside solution")
    }

    fn panics_outside() {
        panic!("marker: outside solution")
    }

    struct PanickingLoader;

    impl UnitLoader for PanickingLoader {
        fn load(&self, _: &UnitLocation) -> Result<UnitDescriptor, LoadError> {
            Ok(UnitDescriptor::new([Some(panicking_part as EntryPoint), None], &[]))
        }
    }

    #[test]
    fn test_route_panics_keeps_previous_hook_outside_solutions() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("year_2025").join("day_01")).unwrap();

        panic::set_hook(Box::new(|info| {
            let report = info.to_string();
            if report.contains("marker:") {
                REACHED_PREVIOUS_HOOK.lock().unwrap().push(report);
            }
        }));
        route_panics();

        let runner = Runner::with_loader(Catalog::new(temp.path()), PanickingLoader);
        let year: Identifier = "2025".parse().unwrap();
        let day: Identifier = "01".parse().unwrap();
        assert!(runner.execute(&year, &day, Part::One).is_err());
        let outside = panic::catch_unwind(panics_outside);
        let _ = panic::take_hook();

        assert!(outside.is_err());
        let reports = REACHED_PREVIOUS_HOOK.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("marker: outside solution"));
    }

    #[test]
    fn test_rejects_bad_filter() {
        let err = init("aoc_runner=loud").unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }
}
