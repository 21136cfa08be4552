//! Month grids and month/year navigation for date-picker widgets.
//!
//! A grid is plain data: rows of seven cells, each holding a day number or
//! nothing. Rendering is left to the caller.

use crate::consts::{DAYS_PER_WEEK, FIRST_MONTH, LAST_MONTH, MIN_DAY};
use crate::convert::{get_days_in_month, to_gregorian, weekday_name};
use crate::prelude::*;
use crate::types::Locale;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// One row of a month grid
pub type Week = [Option<u8>; DAYS_PER_WEEK];

/// The days of one month laid out in week rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    year: i32,
    month: u8,
    calendar: CalendarType,
    first_weekday: Weekday,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn calendar(&self) -> CalendarType {
        self.calendar
    }

    /// Weekday shown in the first column
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Day numbers in grid order, skipping padding
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }

    /// Column headings starting at [`MonthGrid::first_weekday`]
    pub fn weekday_header(&self, locale: Locale) -> [&'static str; DAYS_PER_WEEK] {
        let mut weekday = self.first_weekday;
        std::array::from_fn(|_| {
            let name = weekday_name(weekday, locale);
            weekday = weekday.succ();
            name
        })
    }
}

/// Builds the grid for a month, with weeks starting on the calendar's
/// conventional first day (Sunday for Gregorian, Saturday for the Hijri calendars).
///
/// # Errors
/// `InvalidDateError` if the month or year is out of range.
pub fn generate_month_grid(
    year: i32,
    month: u8,
    calendar: CalendarType,
) -> Result<MonthGrid, InvalidDateError> {
    generate_month_grid_with(year, month, calendar, calendar.first_weekday())
}

/// Builds the grid for a month with an explicit first column weekday.
///
/// # Errors
/// `InvalidDateError` if the month or year is out of range.
pub fn generate_month_grid_with(
    year: i32,
    month: u8,
    calendar: CalendarType,
    first_weekday: Weekday,
) -> Result<MonthGrid, InvalidDateError> {
    let days = get_days_in_month(year, month, calendar)?;

    // Day 1's weekday, read off its Gregorian equivalent.
    let first_day = to_gregorian(&CalendarDate::new(year, month, MIN_DAY, calendar)?)?;
    let weekday = NaiveDate::try_from(first_day)?.weekday();
    let lead = (weekday.num_days_from_sunday() + 7 - first_weekday.num_days_from_sunday()) % 7;

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [None; DAYS_PER_WEEK];
    let mut column = lead as usize;
    for day in MIN_DAY..=days {
        week[column] = Some(day);
        column += 1;
        if column == DAYS_PER_WEEK {
            weeks.push(week);
            week = [None; DAYS_PER_WEEK];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }

    tracing::trace!(year, month, %calendar, weeks = weeks.len(), "built month grid");
    Ok(MonthGrid {
        year,
        month,
        calendar,
        first_weekday,
        weeks,
    })
}

// --- navigation ---

fn within(year: i32, month: u8, calendar: CalendarType) -> Option<(i32, u8)> {
    calendar.year_range().contains(&year).then_some((year, month))
}

fn is_month(month: u8) -> bool {
    (FIRST_MONTH..=LAST_MONTH).contains(&month)
}

/// Month before `(year, month)`; `None` past the start of the supported range
pub fn previous_month(year: i32, month: u8, calendar: CalendarType) -> Option<(i32, u8)> {
    if !is_month(month) {
        return None;
    }
    if month == FIRST_MONTH {
        year.checked_sub(1).and_then(|year| within(year, LAST_MONTH, calendar))
    } else {
        within(year, month - 1, calendar)
    }
}

/// Month after `(year, month)`; `None` past the end of the supported range
pub fn next_month(year: i32, month: u8, calendar: CalendarType) -> Option<(i32, u8)> {
    if !is_month(month) {
        return None;
    }
    if month == LAST_MONTH {
        year.checked_add(1).and_then(|year| within(year, FIRST_MONTH, calendar))
    } else {
        within(year, month + 1, calendar)
    }
}

/// Same month one year earlier
pub fn previous_year(year: i32, month: u8, calendar: CalendarType) -> Option<(i32, u8)> {
    if !is_month(month) {
        return None;
    }
    year.checked_sub(1).and_then(|year| within(year, month, calendar))
}

/// Same month one year later
pub fn next_year(year: i32, month: u8, calendar: CalendarType) -> Option<(i32, u8)> {
    if !is_month(month) {
        return None;
    }
    year.checked_add(1).and_then(|year| within(year, month, calendar))
}
