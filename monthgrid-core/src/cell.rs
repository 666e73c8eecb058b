//! Per-cell truncation of a day's events.

use crate::event::Event;

/// How many events a day cell shows before collapsing the rest.
pub const DEFAULT_MAX_EVENTS_PER_CELL: usize = 3;

/// A day's events split into the ones shown in the cell and the overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEvents<'a> {
    pub visible: Vec<&'a Event>,
    pub overflow: Vec<&'a Event>,
}

impl<'a> CellEvents<'a> {
    /// Split `day_events` after the first `max_per_cell` entries.
    pub fn split(day_events: Vec<&'a Event>, max_per_cell: usize) -> Self {
        let mut visible = day_events;
        let overflow = if visible.len() > max_per_cell {
            visible.split_off(max_per_cell)
        } else {
            Vec::new()
        };

        CellEvents { visible, overflow }
    }

    pub fn overflow_count(&self) -> usize {
        self.overflow.len()
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Label for the overflow action, e.g. "+2 more".
    pub fn more_label(&self) -> Option<String> {
        self.has_overflow()
            .then(|| format!("+{} more", self.overflow_count()))
    }
}
