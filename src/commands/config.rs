use anyhow::Result;
use owo_colors::OwoColorize;

use monthgrid_core::GridConfig;

use super::load_config;
use crate::render::paint;

pub fn run(color: bool) -> Result<()> {
    let config_path = GridConfig::config_path()?;
    let config = load_config()?;

    for line in config_lines(&config_path, &config, color) {
        println!("{line}");
    }

    Ok(())
}

fn config_lines(config_path: &std::path::Path, config: &GridConfig, color: bool) -> Vec<String> {
    let bold = |s: &str| s.bold().to_string();
    let status = if config_path.exists() { "" } else { " (not found, using defaults)" };

    vec![
        paint(color, "Paths", bold),
        format!(
            "  Config:  {}{}",
            config_path.display(),
            paint(color, status, |s| s.dimmed().to_string())
        ),
        String::new(),
        paint(color, "Settings", bold),
        format!("  week_start:           {}", config.week_start),
        format!("  max_events_per_cell:  {}", config.max_events_per_cell),
        format!("  header_format:        {}", config.header_format),
    ]
}
