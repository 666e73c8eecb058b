use std::path::PathBuf;

use anyhow::{Context, Result};
use monthgrid_core::{
    Clock, Event, FixedClock, GridConfig, SystemClock, WeekStart, build_month_grid_with_clock,
    day_header_labels, load_events, parse_date, parse_month,
};

use super::load_config;
use crate::render::{MonthView, Render};

pub struct ShowArgs {
    pub month: Option<String>,
    pub events: Option<PathBuf>,
    pub week_start: Option<WeekStart>,
    pub max_per_cell: Option<usize>,
    pub header_format: Option<String>,
    pub today: Option<String>,
    pub color: bool,
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    week_start: WeekStart,
    max_events_per_cell: usize,
    header_format: String,
}

impl Settings {
    fn resolve(config: GridConfig, args: &ShowArgs) -> Self {
        Settings {
            week_start: args.week_start.unwrap_or(config.week_start),
            max_events_per_cell: args.max_per_cell.unwrap_or(config.max_events_per_cell),
            header_format: args.header_format.clone().unwrap_or(config.header_format),
        }
    }
}

pub fn run(args: ShowArgs) -> Result<()> {
    println!("{}", render_month(&args, load_config()?)?);
    Ok(())
}

fn render_month(args: &ShowArgs, config: GridConfig) -> Result<String> {
    let settings = Settings::resolve(config, args);
    tracing::debug!(?settings, "resolved month view settings");

    let clock: Box<dyn Clock> = match &args.today {
        Some(s) => Box::new(FixedClock(parse_date(s)?)),
        None => Box::new(SystemClock),
    };
    let reference = match &args.month {
        Some(s) => parse_month(s)?,
        None => clock.today(),
    };

    let events: Vec<Event> = match &args.events {
        Some(path) => load_events(path)
            .with_context(|| format!("Could not load events from {}", path.display()))?,
        None => Vec::new(),
    };

    let grid = build_month_grid_with_clock(reference, settings.week_start, clock.as_ref())?;
    let headers = day_header_labels(settings.week_start, &settings.header_format)?;

    let view = MonthView {
        grid: &grid,
        events: &events,
        headers,
        max_events_per_cell: settings.max_events_per_cell,
        color: args.color,
    };

    Ok(view.render())
}
