//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_solutions::CATALOG_ROOT;
use std::path::{Path, PathBuf};

/// What the binary does once configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Menu-driven session over stdin/stdout
    Interactive,
    /// Non-interactive self-check
    SelfCheck,
    /// Print the catalog and exit
    List,
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Absolute catalog root, known to be a directory
    pub root: PathBuf,
    pub mode: Mode,
    /// Log filter directive
    pub log_level: String,
}

impl Config {
    /// Build config from CLI args, validating the catalog root
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let root = match args.root {
            Some(root) => expand_tilde(&root),
            None => PathBuf::from(CATALOG_ROOT),
        };

        let mode = if args.test {
            Mode::SelfCheck
        } else if args.list {
            Mode::List
        } else {
            Mode::Interactive
        };

        Ok(Config {
            root: resolve_root(root)?,
            mode,
            log_level: args.log_level,
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Make the root absolute so entering unit directories cannot shift it
fn resolve_root(root: PathBuf) -> Result<PathBuf, CliError> {
    let resolved = root
        .canonicalize()
        .map_err(|source| CliError::Root { path: root, source })?;
    if !resolved.is_dir() {
        return Err(CliError::Config(format!(
            "catalog root {} is not a directory",
            resolved.display()
        )));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_root_is_bundled_catalog() {
        let config = Config::from_args(args(&[])).unwrap();
        assert_eq!(config.root, Path::new(CATALOG_ROOT).canonicalize().unwrap());
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_modes() {
        assert_eq!(Config::from_args(args(&["--test"])).unwrap().mode, Mode::SelfCheck);
        assert_eq!(Config::from_args(args(&["--list"])).unwrap().mode, Mode::List);
    }

    #[test]
    fn test_root_is_canonicalized() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("catalog");
        std::fs::create_dir(&nested).unwrap();
        let dotted = temp.path().join("catalog").join("..").join("catalog");

        let config = Config::from_args(args(&["--root", dotted.to_str().unwrap()])).unwrap();
        assert_eq!(config.root, nested.canonicalize().unwrap());
        assert!(config.root.is_absolute());
    }

    #[test]
    fn test_root_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = Config::from_args(args(&["--root", missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, CliError::Root { path, .. } if path == missing));
    }

    #[test]
    fn test_root_must_be_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("solution.rs");
        std::fs::write(&file, "").unwrap();
        let err = Config::from_args(args(&["--root", file.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, CliError::Config(message) if message.contains("not a directory")));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home.join(""));
        }
    }
}
