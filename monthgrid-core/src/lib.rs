//! Core types for building month calendar views.
//!
//! This crate is presentation-neutral: it computes the month grid and decides
//! which events land in which day cell. Rendering is left to the caller.
//! - `grid` builds the weeks and day cells of a month
//! - `resolve` assigns events to a single day
//! - `cell`, `headers` and `event` hold the helpers a month view needs around them

pub mod cell;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod headers;
pub mod resolve;
pub mod week_start;

pub use cell::{CellEvents, DEFAULT_MAX_EVENTS_PER_CELL};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use event::{
    DEFAULT_BG_COLOR, Event, EventId, events_from_json, load_events, parse_date, parse_month,
    parse_timestamp,
};
pub use grid::{DayCell, MonthGrid, Week, build_month_grid, build_month_grid_with_clock};
pub use headers::{DEFAULT_HEADER_FORMAT, day_header_labels};
pub use resolve::events_for_day;
pub use week_start::WeekStart;
