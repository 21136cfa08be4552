//! Per-calendar arithmetic around the Julian Day Number pivot.
//!
//! Every function here is pure. The `*_to_jdn` / `jdn_to_*` pairs validate
//! their input against the calendar's month lengths and supported year range
//! and fail with [`InvalidDateError`] instead of clamping.
//!
//! Leap-year rules:
//! - Gregorian: `y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)`.
//! - Solar Hijri: the 33-year break-point table (Borkowski's arithmetic, as
//!   used by the `jalaali` family of libraries). It tracks the official
//!   equinox-based calendar for every year in `1..=3176`, which is the range
//!   this crate accepts.
//! - Lunar Hijri: tabular civil calendar, `(11y + 14) mod 30 < 11`, epoch
//!   1 Muharram 1 AH = JDN 1 948 440.

use crate::InvalidDateError;
use crate::consts::{
    CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    LAST_MONTH, LEAP_YEAR_CYCLE, LUNAR_HIJRI_COMMON_YEAR_DAYS, LUNAR_HIJRI_CYCLE_DAYS,
    LUNAR_HIJRI_EPOCH_JDN, LUNAR_HIJRI_EVEN_MONTH_DAYS, LUNAR_HIJRI_ODD_MONTH_DAYS, MAX_MONTH,
    MIN_DAY, SOLAR_HIJRI_BREAKS, SOLAR_HIJRI_FIRST_HALF_DAYS, SOLAR_HIJRI_GREGORIAN_OFFSET,
    SOLAR_HIJRI_LAST_LONG_MONTH, SOLAR_HIJRI_LAST_MONTH_DAYS, SOLAR_HIJRI_LONG_MONTH_DAYS,
    SOLAR_HIJRI_SHORT_MONTH_DAYS,
};
use crate::types::CalendarType;
use chrono::Weekday;

/// Julian Day Number: days since noon, 1 January 4713 BC (proleptic Julian).
pub type Jdn = i64;

// --- leap-year predicates ---

/// Gregorian leap rule.
pub const fn is_gregorian_leap(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Solar Hijri leap rule (33-year break table).
///
/// Years outside the break table (`-61..3178`) report `false`;
/// [`days_in_month`] rejects them before this is consulted.
pub fn is_solar_hijri_leap(year: i32) -> bool {
    jalali_year_info(year).is_some_and(|info| info.leap == 0)
}

/// Tabular Islamic leap rule: 11 leap years in every 30-year cycle.
#[allow(clippy::cast_lossless)]
pub const fn is_lunar_hijri_leap(year: i32) -> bool {
    (11 * year as i64 + 14).rem_euclid(30) < 11
}

/// Leap predicate for any calendar.
pub fn is_leap_year(year: i32, calendar: CalendarType) -> bool {
    match calendar {
        CalendarType::Gregorian => is_gregorian_leap(year),
        CalendarType::SolarHijri => is_solar_hijri_leap(year),
        CalendarType::LunarHijri => is_lunar_hijri_leap(year),
    }
}

// --- month lengths / validation ---

/// Number of days in `month` of `year` in the given calendar.
///
/// # Errors
/// `InvalidMonth` if the month is not 1-12, `YearOutOfRange` if the year is
/// outside [`CalendarType::year_range`].
pub fn days_in_month(year: i32, month: u8, calendar: CalendarType) -> Result<u8, InvalidDateError> {
    check_month(month)?;
    check_year(year, calendar)?;

    let days = match calendar {
        CalendarType::Gregorian => {
            if month == FEBRUARY && is_gregorian_leap(year) {
                FEBRUARY_DAYS_LEAP
            } else {
                GREGORIAN_DAYS_IN_MONTH[month as usize]
            }
        }
        CalendarType::SolarHijri => match month {
            1..=SOLAR_HIJRI_LAST_LONG_MONTH => SOLAR_HIJRI_LONG_MONTH_DAYS,
            LAST_MONTH if is_solar_hijri_leap(year) => SOLAR_HIJRI_SHORT_MONTH_DAYS,
            LAST_MONTH => SOLAR_HIJRI_LAST_MONTH_DAYS,
            _ => SOLAR_HIJRI_SHORT_MONTH_DAYS,
        },
        CalendarType::LunarHijri => {
            if month % 2 == 1 || (month == LAST_MONTH && is_lunar_hijri_leap(year)) {
                LUNAR_HIJRI_ODD_MONTH_DAYS
            } else {
                LUNAR_HIJRI_EVEN_MONTH_DAYS
            }
        }
    };
    Ok(days)
}

/// Validates a (year, month, day) triple against the calendar's rules.
///
/// # Errors
/// Returns the first violated bound: month, then year range, then day.
pub fn validate(
    year: i32,
    month: u8,
    day: u8,
    calendar: CalendarType,
) -> Result<(), InvalidDateError> {
    let max_day = days_in_month(year, month, calendar)?;
    if day < MIN_DAY || day > max_day {
        return Err(InvalidDateError::InvalidDay {
            calendar,
            year,
            month,
            day,
        });
    }
    Ok(())
}

fn check_month(month: u8) -> Result<(), InvalidDateError> {
    if month == 0 || month > MAX_MONTH {
        return Err(InvalidDateError::InvalidMonth { month });
    }
    Ok(())
}

fn check_year(year: i32, calendar: CalendarType) -> Result<(), InvalidDateError> {
    if !calendar.year_range().contains(&year) {
        return Err(InvalidDateError::YearOutOfRange { calendar, year });
    }
    Ok(())
}

// --- Gregorian ---

/// Proleptic Gregorian date to JDN.
///
/// # Errors
/// Fails if the date is not a valid Gregorian date in years 1-9999.
pub fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> Result<Jdn, InvalidDateError> {
    validate(year, month, day, CalendarType::Gregorian)?;
    Ok(gregorian_to_jdn_raw(year, month, day))
}

/// JDN to proleptic Gregorian date.
///
/// # Errors
/// `DayOutOfRange` if the day falls outside years 1-9999.
pub fn jdn_to_gregorian(jdn: Jdn) -> Result<(i32, u8, u8), InvalidDateError> {
    check_jdn(jdn, CalendarType::Gregorian)?;
    Ok(jdn_to_gregorian_raw(jdn))
}

// Fliegel & Van Flandern; exact for any year >= -4800.
fn gregorian_to_jdn_raw(year: i32, month: u8, day: u8) -> Jdn {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

// Richards' inverse of the above.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn jdn_to_gregorian_raw(jdn: Jdn) -> (i32, u8, u8) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u8, day as u8)
}

// --- Solar Hijri ---

/// Placement of a Jalali year relative to the Gregorian calendar.
struct JalaliYearInfo {
    /// Gregorian year in which the Jalali year starts
    gregorian_year: i32,
    /// Day of March on which 1 Farvardin falls
    march_day: i32,
    /// Years since the last leap year; 0 means this year is leap
    leap: i32,
}

// Truncating division throughout: every intermediate is non-negative for the
// years the table covers, except the final `leap` step which maps -1 to 4.
fn jalali_year_info(jy: i32) -> Option<JalaliYearInfo> {
    let first = SOLAR_HIJRI_BREAKS[0];
    let last = SOLAR_HIJRI_BREAKS[SOLAR_HIJRI_BREAKS.len() - 1];
    if jy < first || jy >= last {
        return None;
    }

    let gregorian_year = jy + SOLAR_HIJRI_GREGORIAN_OFFSET;
    let mut leap_j = -14;
    let mut jp = first;
    let mut jump = 0;
    for &jm in &SOLAR_HIJRI_BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(JalaliYearInfo {
        gregorian_year,
        march_day,
        leap,
    })
}

/// Solar Hijri date to JDN.
///
/// # Errors
/// Fails if the date is invalid or the year is outside 1-3176.
pub fn solar_hijri_to_jdn(year: i32, month: u8, day: u8) -> Result<Jdn, InvalidDateError> {
    validate(year, month, day, CalendarType::SolarHijri)?;
    solar_hijri_to_jdn_raw(year, month, day).ok_or(InvalidDateError::YearOutOfRange {
        calendar: CalendarType::SolarHijri,
        year,
    })
}

/// JDN to Solar Hijri date.
///
/// # Errors
/// `DayOutOfRange` if the day precedes 1 Farvardin 1 or follows the end of 3176.
pub fn jdn_to_solar_hijri(jdn: Jdn) -> Result<(i32, u8, u8), InvalidDateError> {
    check_jdn(jdn, CalendarType::SolarHijri)?;
    jdn_to_solar_hijri_raw(jdn).ok_or(InvalidDateError::DayOutOfRange {
        calendar: CalendarType::SolarHijri,
        jdn,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn solar_hijri_to_jdn_raw(year: i32, month: u8, day: u8) -> Option<Jdn> {
    let info = jalali_year_info(year)?;
    let farvardin_first = gregorian_to_jdn_raw(info.gregorian_year, 3, info.march_day as u8);
    let m = i64::from(month);
    let offset = (m - 1) * 31 - (m / 7) * (m - 7) + i64::from(day) - 1;
    Some(farvardin_first + offset)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn jdn_to_solar_hijri_raw(jdn: Jdn) -> Option<(i32, u8, u8)> {
    let (gregorian_year, _, _) = jdn_to_gregorian_raw(jdn);
    let mut year = gregorian_year - SOLAR_HIJRI_GREGORIAN_OFFSET;
    let info = jalali_year_info(year)?;
    let farvardin_first = gregorian_to_jdn_raw(info.gregorian_year, 3, info.march_day as u8);

    let mut k = jdn - farvardin_first;
    if k >= 0 {
        if k < SOLAR_HIJRI_FIRST_HALF_DAYS {
            return Some((year, (1 + k / 31) as u8, (k % 31 + 1) as u8));
        }
        k -= SOLAR_HIJRI_FIRST_HALF_DAYS;
    } else {
        // Still in the previous year's autumn/winter half.
        year -= 1;
        k += 179;
        if info.leap == 1 {
            k += 1;
        }
    }
    Some((year, (7 + k / 30) as u8, (k % 30 + 1) as u8))
}

// --- Lunar Hijri ---

/// Lunar Hijri (tabular) date to JDN.
///
/// # Errors
/// Fails if the date is invalid or the year is outside 1-9665.
pub fn lunar_hijri_to_jdn(year: i32, month: u8, day: u8) -> Result<Jdn, InvalidDateError> {
    validate(year, month, day, CalendarType::LunarHijri)?;
    Ok(lunar_hijri_to_jdn_raw(year, month, day))
}

/// JDN to Lunar Hijri (tabular) date.
///
/// # Errors
/// `DayOutOfRange` if the day precedes 1 Muharram 1 or follows the end of 9665.
pub fn jdn_to_lunar_hijri(jdn: Jdn) -> Result<(i32, u8, u8), InvalidDateError> {
    check_jdn(jdn, CalendarType::LunarHijri)?;
    Ok(jdn_to_lunar_hijri_raw(jdn))
}

fn lunar_hijri_to_jdn_raw(year: i32, month: u8, day: u8) -> Jdn {
    let y = i64::from(year);
    let m = i64::from(month);
    // Days before this month: alternating 30/29, i.e. ceil(29.5 * (m - 1)).
    let months_before = (59 * (m - 1) + 1) / 2;
    i64::from(day)
        + months_before
        + (y - 1) * LUNAR_HIJRI_COMMON_YEAR_DAYS
        + (3 + 11 * y).div_euclid(30)
        + LUNAR_HIJRI_EPOCH_JDN
        - 1
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn jdn_to_lunar_hijri_raw(jdn: Jdn) -> (i32, u8, u8) {
    let year =
        (30 * (jdn - LUNAR_HIJRI_EPOCH_JDN) + 10_646).div_euclid(LUNAR_HIJRI_CYCLE_DAYS) as i32;

    let mut month = 1;
    while month < LAST_MONTH && jdn >= lunar_hijri_to_jdn_raw(year, month + 1, MIN_DAY) {
        month += 1;
    }
    let day = jdn - lunar_hijri_to_jdn_raw(year, month, MIN_DAY) + 1;
    (year, month, day as u8)
}

// --- dispatch ---

/// Converts a date in any calendar to its JDN.
///
/// # Errors
/// Fails if the date violates the calendar's bounds.
pub fn to_jdn(
    year: i32,
    month: u8,
    day: u8,
    calendar: CalendarType,
) -> Result<Jdn, InvalidDateError> {
    match calendar {
        CalendarType::Gregorian => gregorian_to_jdn(year, month, day),
        CalendarType::SolarHijri => solar_hijri_to_jdn(year, month, day),
        CalendarType::LunarHijri => lunar_hijri_to_jdn(year, month, day),
    }
}

/// Converts a JDN to a (year, month, day) triple in `calendar`.
///
/// # Errors
/// `DayOutOfRange` if the day is not representable in the calendar's supported range.
pub fn from_jdn(jdn: Jdn, calendar: CalendarType) -> Result<(i32, u8, u8), InvalidDateError> {
    match calendar {
        CalendarType::Gregorian => jdn_to_gregorian(jdn),
        CalendarType::SolarHijri => jdn_to_solar_hijri(jdn),
        CalendarType::LunarHijri => jdn_to_lunar_hijri(jdn),
    }
}

/// First and last JDN (inclusive) representable in `calendar`.
pub fn jdn_range(calendar: CalendarType) -> (Jdn, Jdn) {
    let range = calendar.year_range();
    let (first_year, last_year) = (*range.start(), *range.end());
    match calendar {
        CalendarType::Gregorian => (
            gregorian_to_jdn_raw(first_year, 1, 1),
            gregorian_to_jdn_raw(last_year, 12, 31),
        ),
        CalendarType::SolarHijri => {
            // Both bounds lie inside the break table.
            let start = solar_hijri_to_jdn_raw(first_year, 1, 1).unwrap_or_default();
            let next = solar_hijri_to_jdn_raw(last_year + 1, 1, 1).unwrap_or_default();
            (start, next - 1)
        }
        CalendarType::LunarHijri => (
            lunar_hijri_to_jdn_raw(first_year, 1, 1),
            lunar_hijri_to_jdn_raw(last_year + 1, 1, 1) - 1,
        ),
    }
}

fn check_jdn(jdn: Jdn, calendar: CalendarType) -> Result<(), InvalidDateError> {
    let (first, last) = jdn_range(calendar);
    if jdn < first || jdn > last {
        return Err(InvalidDateError::DayOutOfRange { calendar, jdn });
    }
    Ok(())
}

/// Day of the week for a JDN (JDN 0 was a Monday).
pub const fn weekday_of_jdn(jdn: Jdn) -> Weekday {
    match jdn.rem_euclid(7) {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}
