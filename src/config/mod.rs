// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

pub mod model;
pub mod parser;

use model::LapwatchConfig;

/// Candidate config locations, highest priority first.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(mut path) = dirs::config_dir() {
        path.push("lapwatch");
        path.push("lapwatch.rune");
        paths.push(path);
    }

    paths.push(PathBuf::from("/etc/lapwatch/lapwatch.rune"));
    paths
}

/// Load config from an explicit path, or the first default location that
/// exists. No file at all means built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<LapwatchConfig> {
    if let Some(path) = explicit {
        return parser::load_file(path)
            .wrap_err_with(|| format!("could not load config {}", path.display()));
    }

    match default_config_paths().into_iter().find(|p| p.exists()) {
        Some(path) => parser::load_file(&path)
            .wrap_err_with(|| format!("could not load config {}", path.display())),
        None => {
            crate::sdebug!("Config", "No config file found, using defaults");
            Ok(LapwatchConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_end_with_system_config() {
        let paths = default_config_paths();
        assert_eq!(paths.last().unwrap(), &PathBuf::from("/etc/lapwatch/lapwatch.rune"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("lapwatch-does-not-exist.rune");
        assert!(load(Some(&missing)).is_err());
    }
}
