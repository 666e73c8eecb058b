pub mod config;
pub mod day;
pub mod show;

use anyhow::Result;
use monthgrid_core::{GridConfig, GridError};

/// Load the user config, naming the file on failure.
pub(crate) fn load_config() -> Result<GridConfig> {
    GridConfig::load().map_err(|e: GridError| anyhow::anyhow!("Could not load config: {e}"))
}
