mod consts;
mod prelude;
mod types;

pub mod convert;
pub mod field;
pub mod grid;
pub mod input;
pub mod math;
mod names;
pub mod numerals;

pub use consts::*;
pub use convert::{convert, from_gregorian, get_days_in_month, get_month_name, to_gregorian};
pub use field::{DateField, DateInput, Error};
pub use grid::{MonthGrid, generate_month_grid};
pub use input::{format_date_for_input, parse_input_date};
pub use math::Jdn;
pub use numerals::{NumeralOptions, is_valid_numeral, sanitize, to_western_arabic};
pub use types::{CalendarType, Locale, UnsupportedCalendarError};

use crate::prelude::*;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A day in one of the supported calendars.
///
/// Always well-formed: the month is 1-12, the day fits the month and the year
/// lies in the calendar's supported range. The Julian Day Number is computed
/// once at construction and is what orders dates across calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "{:04}{}{:02}{}{:02}",
    year,
    "calendar.separator()",
    month,
    "calendar.separator()",
    day
)]
#[serde(try_from = "RawCalendarDate", into = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
    calendar: CalendarType,
    jdn: Jdn,
}

/// Reasons a date value is rejected. Nothing is ever clamped or guessed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidDateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", month, MAX_MONTH)]
    InvalidMonth { month: u8 },
    #[display(fmt = "Invalid day {day} for {calendar} month {year}-{month:02}")]
    InvalidDay {
        calendar: CalendarType,
        year: i32,
        month: u8,
        day: u8,
    },
    #[display(fmt = "Year {year} is outside the supported {calendar} range")]
    YearOutOfRange { calendar: CalendarType, year: i32 },
    #[display(fmt = "Day {jdn} cannot be represented in the {calendar} calendar")]
    DayOutOfRange { calendar: CalendarType, jdn: Jdn },
    #[display(fmt = "Expected a {expected} date, found a {found} date")]
    WrongCalendar {
        expected: CalendarType,
        found: CalendarType,
    },
}

impl std::error::Error for InvalidDateError {}

impl CalendarDate {
    /// Creates a validated date in `calendar`.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the month, day or year is out of range.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        calendar: CalendarType,
    ) -> Result<Self, InvalidDateError> {
        let jdn = math::to_jdn(year, month, day, calendar)?;
        Ok(Self {
            year,
            month,
            day,
            calendar,
            jdn,
        })
    }

    /// Creates a validated Gregorian date
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn gregorian(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        Self::new(year, month, day, CalendarType::Gregorian)
    }

    /// Creates a validated Solar Hijri date
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn solar_hijri(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        Self::new(year, month, day, CalendarType::SolarHijri)
    }

    /// Creates a validated Lunar Hijri date
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn lunar_hijri(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        Self::new(year, month, day, CalendarType::LunarHijri)
    }

    /// The day numbered `jdn`, expressed in `calendar`.
    ///
    /// # Errors
    /// `DayOutOfRange` if the calendar cannot represent that day.
    pub fn from_jdn(jdn: Jdn, calendar: CalendarType) -> Result<Self, InvalidDateError> {
        let (year, month, day) = math::from_jdn(jdn, calendar)?;
        Ok(Self {
            year,
            month,
            day,
            calendar,
            jdn,
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn calendar(&self) -> CalendarType {
        self.calendar
    }

    /// Julian Day Number of this date
    pub const fn jdn(&self) -> Jdn {
        self.jdn
    }

    /// Day of the week
    pub const fn weekday(&self) -> Weekday {
        math::weekday_of_jdn(self.jdn)
    }

    /// Whether this date's year is a leap year in its own calendar
    pub fn is_leap_year(&self) -> bool {
        math::is_leap_year(self.year, self.calendar)
    }

    /// Same day, expressed in `target`.
    ///
    /// # Errors
    /// `DayOutOfRange` if `target` cannot represent this day.
    pub fn to_calendar(&self, target: CalendarType) -> Result<Self, InvalidDateError> {
        convert::convert(self, target)
    }

    /// Converts to database columns: (year, month, day, calendar)
    pub const fn to_columns(&self) -> (i32, u8, u8, CalendarType) {
        (self.year, self.month, self.day, self.calendar)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Chronological first; the same day in two calendars breaks ties by calendar.
        match self.jdn.cmp(&other.jdn) {
            Ordering::Equal => self.calendar.rank().cmp(&other.calendar.rank()),
            ord => ord,
        }
    }
}

impl TryFrom<(i32, u8, u8, CalendarType)> for CalendarDate {
    type Error = InvalidDateError;

    fn try_from(value: (i32, u8, u8, CalendarType)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

/// Wire shape of a [`CalendarDate`]: `{year, month, day, calendarType}`.
#[derive(Clone, Serialize, Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u8,
    day: u8,
    #[serde(rename = "calendarType")]
    calendar: CalendarType,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = InvalidDateError;

    fn try_from(raw: RawCalendarDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day, raw.calendar)
    }
}

impl From<CalendarDate> for RawCalendarDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            calendar: date.calendar,
        }
    }
}
