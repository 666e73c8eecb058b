//! Month grid construction.
//!
//! A month grid is the run of whole weeks covering every day of a month,
//! padded with days from the neighbouring months so the first and last
//! weeks are complete.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::error::{GridError, GridResult};
use crate::week_start::WeekStart;

/// A single day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the day belongs to the month the grid was built for
    pub is_current_month: bool,
    pub is_today: bool,
}

/// Seven consecutive days, starting on the configured week-start day.
pub type Week = [DayCell; 7];

/// The weeks of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: WeekStart,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// All cells, week by week.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.weeks[0][0].date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.weeks[self.weeks.len() - 1][6].date
    }

    /// The 1st of the grid's month, always a current-month cell.
    pub fn first_of_month(&self) -> NaiveDate {
        self.days()
            .find(|cell| cell.is_current_month)
            .map(|cell| cell.date)
            .unwrap_or_else(|| self.first_day())
    }
}

/// Build the grid for the month containing `reference`.
///
/// `today` marks the matching cell with `is_today`; pass the same value to
/// get identical grids. Fails with [`GridError::DateOutOfRange`] only for the
/// first and last months chrono can represent, whose padding days don't exist.
pub fn build_month_grid(
    reference: NaiveDate,
    week_start: WeekStart,
    today: NaiveDate,
) -> GridResult<MonthGrid> {
    let (year, month) = (reference.year(), reference.month());
    let out_of_range = || GridError::DateOutOfRange(format!("{year}-{month:02}"));

    let first = reference.with_day(1).ok_or_else(out_of_range)?;
    let last = last_of_month(year, month).ok_or_else(out_of_range)?;

    let mut cursor = week_start.start_of_week(first);
    let mut weeks: Vec<Week> = Vec::with_capacity(6);

    while let Some(week_first) = cursor {
        if week_first > last && !weeks.is_empty() {
            break;
        }
        // Once the seventh day exists, every day before it does too
        if week_first.checked_add_days(Days::new(6)).is_none() {
            return Err(out_of_range());
        }

        let week: Week = std::array::from_fn(|offset| {
            let date = week_first + Days::new(offset as u64);
            DayCell {
                date,
                is_current_month: date.year() == year && date.month() == month,
                is_today: date == today,
            }
        });
        weeks.push(week);
        cursor = week_first.checked_add_days(Days::new(7));
    }

    if weeks.is_empty() {
        return Err(out_of_range());
    }

    debug!(year, month, %week_start, weeks = weeks.len(), "built month grid");

    Ok(MonthGrid {
        year,
        month,
        week_start,
        weeks,
    })
}

/// Like [`build_month_grid`], reading today from `clock` once.
pub fn build_month_grid_with_clock(
    reference: NaiveDate,
    week_start: WeekStart,
    clock: &(impl Clock + ?Sized),
) -> GridResult<MonthGrid> {
    build_month_grid(reference, week_start, clock.today())
}

fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    (28..=31)
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
}
