//! Weekday header labels.

use std::fmt::Write;

use chrono::{Duration, NaiveDate};

use crate::error::{GridError, GridResult};
use crate::week_start::WeekStart;

/// Default strftime pattern for header labels ("Mon", "Tue", ...).
pub const DEFAULT_HEADER_FORMAT: &str = "%a";

/// Seven column headers in grid order, formatted with a chrono strftime pattern.
///
/// Fails with [`GridError::InvalidFormat`] when the pattern has specifiers
/// chrono can't render for a date.
pub fn day_header_labels(week_start: WeekStart, format: &str) -> GridResult<[String; 7]> {
    // Any fixed week works; 2024-01-01 is a Monday.
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid reference date");
    let base = week_start
        .start_of_week(monday + Duration::days(6))
        .ok_or_else(|| GridError::InvalidFormat(format.to_string()))?;

    let mut labels: [String; 7] = Default::default();
    for (i, label) in labels.iter_mut().enumerate() {
        let date = base + Duration::days(i as i64);
        write!(label, "{}", date.format(format))
            .map_err(|_| GridError::InvalidFormat(format.to_string()))?;
    }
    Ok(labels)
}
