//! Calendar events as supplied by the caller.
//!
//! Events are plain input data: monthgrid never mutates or stores them. The
//! JSON shape matches what a front end typically passes to a month view:
//!
//! ```json
//! { "id": 1, "title": "Standup", "start": "2024-03-10T09:00", "end": "2024-03-10T09:15", "bgColor": "#f5a" }
//! ```

use std::fmt;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GridError, GridResult};

/// Background colour used for events that don't specify one.
pub const DEFAULT_BG_COLOR: &str = "#80C5F6";

/// Event identifier, either a string or any JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{n}"),
            EventId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        EventId::Number(value.into())
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId::Text(value.to_string())
    }
}

/// A calendar event with a timezone-naive start and end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(serialize_with = "serialize_timestamp", deserialize_with = "deserialize_timestamp")]
    pub start: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp", deserialize_with = "deserialize_timestamp")]
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            start,
            end,
            bg_color: None,
        }
    }

    /// Background colour, falling back to [`DEFAULT_BG_COLOR`].
    pub fn color(&self) -> &str {
        self.bg_color.as_deref().unwrap_or(DEFAULT_BG_COLOR)
    }

    /// Short start/end summary for event details, e.g. "09:00 Mar 10 - 10:30 Mar 10".
    pub fn time_span_label(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.start.format("%H:%M"),
            self.start.format("%b %-d"),
            self.end.format("%H:%M"),
            self.end.format("%b %-d"),
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp into a naive date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]` (or with a space instead of `T`), a
/// bare `YYYY-MM-DD` meaning midnight, and RFC 3339 with an offset, which is
/// reduced to its wall-clock time.
pub fn parse_timestamp(s: &str) -> GridResult<NaiveDateTime> {
    let s = s.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }

    Err(GridError::InvalidTimestamp(s.to_string()))
}

/// Parse YYYY-MM-DD.
pub fn parse_date(s: &str) -> GridResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| GridError::InvalidDate(s.to_string()))
}

/// Parse YYYY-MM into the first day of that month.
pub fn parse_month(s: &str) -> GridResult<NaiveDate> {
    let s = s.trim();
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| GridError::InvalidMonth(s.to_string()))?;

    let year: i32 = year.parse().map_err(|_| GridError::InvalidMonth(s.to_string()))?;
    let month: u32 = month.parse().map_err(|_| GridError::InvalidMonth(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| GridError::InvalidMonth(s.to_string()))
}

/// Parse a JSON array of events.
pub fn events_from_json(json: &str) -> GridResult<Vec<Event>> {
    serde_json::from_str(json).map_err(|e| GridError::Serialization(e.to_string()))
}

/// Load a JSON array of events from a file.
pub fn load_events(path: &Path) -> GridResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    let events = events_from_json(&content)?;
    tracing::debug!(path = %path.display(), count = events.len(), "loaded events");
    Ok(events)
}

fn serialize_timestamp<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s).map_err(serde::de::Error::custom)
}
