//! Week-start convention.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::GridError;

/// The day calendar weeks begin on.
///
/// Only Sunday (0) and Monday (1) are defined; any other value is rejected
/// when converting from an integer or string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Start of the week containing `date`, or `None` when that falls before
    /// the earliest representable date.
    ///
    /// Monday-start follows ISO weeks; Sunday-start steps back by the
    /// Sunday-based weekday index.
    pub fn start_of_week(self, date: NaiveDate) -> Option<NaiveDate> {
        let offset = match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        };
        date.checked_sub_days(Days::new(u64::from(offset)))
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WeekStart::Sunday),
            1 => Ok(WeekStart::Monday),
            other => Err(GridError::InvalidWeekStart(other.to_string())),
        }
    }
}

impl FromStr for WeekStart {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "sun" | "sunday" => Ok(WeekStart::Sunday),
            "1" | "mon" | "monday" => Ok(WeekStart::Monday),
            _ => Err(GridError::InvalidWeekStart(s.to_string())),
        }
    }
}

/// Accepts the same forms as `FromStr` and `TryFrom<u8>`: a name or 0/1.
impl<'de> Deserialize<'de> for WeekStart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Index(u8),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Index(index) => WeekStart::try_from(index),
            Repr::Name(name) => name.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}
