//! Month view configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cell::DEFAULT_MAX_EVENTS_PER_CELL;
use crate::error::{GridError, GridResult};
use crate::headers::DEFAULT_HEADER_FORMAT;
use crate::week_start::WeekStart;

fn default_max_events_per_cell() -> usize {
    DEFAULT_MAX_EVENTS_PER_CELL
}

fn default_header_format() -> String {
    DEFAULT_HEADER_FORMAT.to_string()
}

/// Configuration at ~/.config/monthgrid/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    #[serde(default = "default_max_events_per_cell")]
    pub max_events_per_cell: usize,

    #[serde(default = "default_header_format")]
    pub header_format: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            week_start: WeekStart::default(),
            max_events_per_cell: DEFAULT_MAX_EVENTS_PER_CELL,
            header_format: default_header_format(),
        }
    }
}

impl GridConfig {
    pub fn config_path() -> GridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GridError::Config("Could not determine config directory".into()))?
            .join("monthgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> GridResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> GridResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: GridConfig =
                toml::from_str(&content).map_err(|e| GridError::Config(e.to_string()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GridConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, GridConfig::default());
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.max_events_per_cell, 3);
        assert_eq!(config.header_format, "%a");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = \"sunday\"\n").unwrap();

        let config = GridConfig::load_from(&path).unwrap();

        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.max_events_per_cell, 3);
    }

    #[test]
    fn test_invalid_week_start_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = \"friday\"\n").unwrap();

        assert!(matches!(GridConfig::load_from(&path), Err(GridError::Config(_))));
    }

    #[test]
    fn test_numeric_week_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = 0\nmax_events_per_cell = 5\n").unwrap();

        let config = GridConfig::load_from(&path).unwrap();

        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.max_events_per_cell, 5);
    }

    #[test]
    fn test_out_of_range_numeric_week_start_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = 2\n").unwrap();

        assert!(matches!(GridConfig::load_from(&path), Err(GridError::Config(_))));
    }
}
