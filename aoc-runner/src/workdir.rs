//! Scoped change of the process working directory

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// The working directory is process-wide; guards take turns.
static WORKING_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Holds the process inside a directory until dropped
///
/// Entering records the current directory and switches to the new one;
/// dropping switches back, whatever happened in between. Guards are
/// serialized, so a second `enter` blocks until the first guard is gone.
/// Guards must not nest: entering again on the thread holding a guard,
/// including through [`Runner::execute`](crate::Runner::execute) from inside
/// an entry point, deadlocks.
///
/// ```no_run
/// use aoc_runner::WorkingDirGuard;
///
/// let guard = WorkingDirGuard::enter("puzzles/year_2025/day_01".as_ref())?;
/// let input = std::fs::read_to_string("input.txt");
/// drop(guard);
/// # Ok::<(), std::io::Error>(())
/// ```
#[must_use = "the previous working directory is restored when the guard is dropped"]
pub struct WorkingDirGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl WorkingDirGuard {
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let lock = WORKING_DIR_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        debug!(from = %previous.display(), to = %dir.display(), "entered unit directory");
        Ok(Self {
            previous,
            _lock: lock,
        })
    }

    /// The directory that is restored on drop
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(dir = %self.previous.display(), error = %e, "failed to restore working directory");
        }
    }
}
