//! Text rendering of a month view.
//!
//! Cells are laid out as fixed-width columns. Padding happens before any
//! colouring so ANSI escapes never skew the alignment.

use chrono::Datelike;
use monthgrid_core::{CellEvents, DayCell, Event, MonthGrid, Week, events_for_day};
use owo_colors::OwoColorize;

/// Width of a day column, excluding the separator.
pub const CELL_WIDTH: usize = 14;

pub trait Render {
    fn render(&self) -> String;
}

/// Everything needed to draw one month.
pub struct MonthView<'a> {
    pub grid: &'a MonthGrid,
    pub events: &'a [Event],
    pub headers: [String; 7],
    pub max_events_per_cell: usize,
    pub color: bool,
}

impl Render for MonthView<'_> {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let title = self.grid.first_of_month().format("%B %Y").to_string();
        lines.push(self.paint(&title, |s| s.bold().to_string()));

        let header: Vec<String> = self.headers.iter().map(|h| pad(h)).collect();
        lines.push(self.paint(&header.join(" "), |s| s.dimmed().to_string()));

        for week in &self.grid.weeks {
            lines.extend(self.render_week(week));
        }

        lines.join("\n")
    }
}

impl MonthView<'_> {
    fn render_week(&self, week: &Week) -> Vec<String> {
        let cells: Vec<CellEvents> = week
            .iter()
            .map(|cell| CellEvents::split(events_for_day(self.events, cell.date), self.max_events_per_cell))
            .collect();

        // One row for the day numbers, one per visible event slot, one for "+N more"
        let event_rows = cells.iter().map(|c| c.visible.len()).max().unwrap_or(0);
        let has_more = cells.iter().any(|c| c.has_overflow());

        let mut rows = vec![self.join_row(week.iter().map(|cell| self.day_number(cell)))];

        for slot in 0..event_rows {
            rows.push(self.join_row(cells.iter().map(|c| match c.visible.get(slot) {
                Some(event) => self.event_pill(event),
                None => pad(""),
            })));
        }

        if has_more {
            rows.push(self.join_row(cells.iter().map(|c| {
                let label = c.more_label().unwrap_or_default();
                self.paint(&pad(&label), |s| s.italic().to_string())
            })));
        }

        rows.push(String::new());
        rows
    }

    fn join_row(&self, cells: impl Iterator<Item = String>) -> String {
        cells.collect::<Vec<_>>().join(" ").trim_end().to_string()
    }

    fn day_number(&self, cell: &DayCell) -> String {
        let text = pad(&cell.date.day().to_string());
        if cell.is_today {
            self.paint(&text, |s| s.reversed().bold().to_string())
        } else if !cell.is_current_month {
            self.paint(&text, |s| s.dimmed().to_string())
        } else {
            text
        }
    }

    fn event_pill(&self, event: &Event) -> String {
        let text = pad(&truncate(&event.title, CELL_WIDTH));
        match parse_hex_color(event.color()) {
            Some((r, g, b)) => self.paint(&text, |s| s.on_truecolor(r, g, b).black().to_string()),
            None => text,
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        paint(self.color, text, style)
    }
}

/// Apply `style` only when colour output is enabled.
pub fn paint(color: bool, text: &str, style: impl Fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_string() }
}

/// Detail lines for every event of a day, as shown by the "more" action.
pub fn render_day_events(events: &[&Event], color: bool) -> Vec<String> {
    events
        .iter()
        .map(|event| {
            let span = paint(color, &event.time_span_label(), |s| s.dimmed().to_string());
            format!("  {} {}", event.title, span)
        })
        .collect()
}

fn pad(text: &str) -> String {
    format!("{:<width$}", text, width = CELL_WIDTH)
}

/// Shorten to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Parse "#rrggbb" or "#rgb".
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    let expand = |c: char| c.to_digit(16).map(|d| (d * 17) as u8);

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut chars = hex.chars();
            Some((
                expand(chars.next()?)?,
                expand(chars.next()?)?,
                expand(chars.next()?)?,
            ))
        }
        _ => None,
    }
}
