use std::path::Path;

use anyhow::{Context, Result};
use monthgrid_core::{events_for_day, load_events, parse_date};
use owo_colors::OwoColorize;

use crate::render::{paint, render_day_events};

pub fn run(date: &str, events_path: &Path, color: bool) -> Result<()> {
    for line in day_lines(date, events_path, color)? {
        println!("{line}");
    }
    Ok(())
}

/// Heading plus one line per event overlapping the day.
fn day_lines(date: &str, events_path: &Path, color: bool) -> Result<Vec<String>> {
    let day = parse_date(date)?;
    let events = load_events(events_path)
        .with_context(|| format!("Could not load events from {}", events_path.display()))?;
    let day_events = events_for_day(&events, day);

    let label = day.format("%A %B %-d, %Y").to_string();
    let mut lines = vec![paint(color, &label, |s| s.bold().to_string())];

    if day_events.is_empty() {
        lines.push(format!("  {}", paint(color, "No events", |s| s.dimmed().to_string())));
    } else {
        lines.extend(render_day_events(&day_events, color));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "title": "Late show", "start": "2024-03-10T23:00", "end": "2024-03-11T01:00"},
                {"id": 2, "title": "Breakfast", "start": "2024-03-11T08:00", "end": "2024-03-11T09:00"}
            ]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_day_lines_lists_overlapping_events() {
        let dir = tempfile::tempdir().unwrap();
        let lines = day_lines("2024-03-11", &events_file(&dir), false).unwrap();

        assert_eq!(
            lines,
            vec![
                "Monday March 11, 2024".to_string(),
                "  Late show 23:00 Mar 10 - 01:00 Mar 11".to_string(),
                "  Breakfast 08:00 Mar 11 - 09:00 Mar 11".to_string(),
            ]
        );
    }

    #[test]
    fn test_day_without_events_is_plain_when_color_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let lines = day_lines("2024-03-12", &events_file(&dir), false).unwrap();

        assert_eq!(lines, vec!["Tuesday March 12, 2024".to_string(), "  No events".to_string()]);
    }

    #[test]
    fn test_missing_events_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = day_lines("2024-03-12", &dir.path().join("missing.json"), false).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
