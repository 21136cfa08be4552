//! Public conversion API.
//!
//! Every conversion goes calendar → JDN → calendar, never directly between
//! the two Hijri calendars, so converting A→B→C always agrees with A→C.

use crate::consts::MAX_MONTH;
use crate::math;
use crate::names;
use crate::prelude::*;
use crate::types::Locale;
use chrono::Weekday;

/// Expresses a Gregorian date in `target`.
///
/// # Errors
/// `WrongCalendar` if `date` is not Gregorian, `DayOutOfRange` if `target`
/// cannot represent the day (e.g. Hijri dates before 622).
pub fn from_gregorian(
    date: &CalendarDate,
    target: CalendarType,
) -> Result<CalendarDate, InvalidDateError> {
    if date.calendar() != CalendarType::Gregorian {
        return Err(InvalidDateError::WrongCalendar {
            expected: CalendarType::Gregorian,
            found: date.calendar(),
        });
    }
    convert(date, target)
}

/// Expresses any date in the Gregorian calendar.
///
/// # Errors
/// Fails if the date violates its own calendar's month/day bounds.
pub fn to_gregorian(date: &CalendarDate) -> Result<CalendarDate, InvalidDateError> {
    math::validate(date.year(), date.month(), date.day(), date.calendar())?;
    convert(date, CalendarType::Gregorian)
}

/// Expresses `date` in `target` through its Julian Day Number.
///
/// # Errors
/// `DayOutOfRange` if `target` cannot represent the day.
pub fn convert(
    date: &CalendarDate,
    target: CalendarType,
) -> Result<CalendarDate, InvalidDateError> {
    if date.calendar() == target {
        return Ok(*date);
    }
    let converted = CalendarDate::from_jdn(date.jdn(), target)?;
    tracing::trace!(from = %date, to = %converted, jdn = date.jdn(), "converted date");
    Ok(converted)
}

/// Number of days in a month; used by form validation and the grid builder.
///
/// # Errors
/// `InvalidMonth` or `YearOutOfRange`.
pub fn get_days_in_month(
    year: i32,
    month: u8,
    calendar: CalendarType,
) -> Result<u8, InvalidDateError> {
    math::days_in_month(year, month, calendar)
}

/// English (transliterated) name of a month.
///
/// # Errors
/// `InvalidMonth` if `month` is not 1-12.
pub fn get_month_name(month: u8, calendar: CalendarType) -> Result<&'static str, InvalidDateError> {
    month_name_in(month, calendar, Locale::English)
}

/// Name of a month in the given locale.
///
/// # Errors
/// `InvalidMonth` if `month` is not 1-12.
pub fn month_name_in(
    month: u8,
    calendar: CalendarType,
    locale: Locale,
) -> Result<&'static str, InvalidDateError> {
    if month == 0 || month > MAX_MONTH {
        return Err(InvalidDateError::InvalidMonth { month });
    }
    Ok(names::month_names(calendar, locale)[usize::from(month - 1)])
}

/// Name of a weekday in the given locale
pub const fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    names::weekday_name(weekday, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_gregorian() {
        let date = CalendarDate::gregorian(2024, 3, 20).unwrap();

        let shamsi = from_gregorian(&date, CalendarType::SolarHijri).unwrap();
        assert_eq!(shamsi, CalendarDate::solar_hijri(1403, 1, 1).unwrap());

        let qamari = from_gregorian(&date, CalendarType::LunarHijri).unwrap();
        assert_eq!(qamari.calendar(), CalendarType::LunarHijri);
        assert_eq!(to_gregorian(&qamari).unwrap(), date);

        let same = from_gregorian(&date, CalendarType::Gregorian).unwrap();
        assert_eq!(same, date);
    }

    #[test]
    fn test_from_gregorian_requires_gregorian_input() {
        let date = CalendarDate::solar_hijri(1403, 1, 1).unwrap();
        assert_eq!(
            from_gregorian(&date, CalendarType::LunarHijri),
            Err(InvalidDateError::WrongCalendar {
                expected: CalendarType::Gregorian,
                found: CalendarType::SolarHijri,
            })
        );
    }

    #[test]
    fn test_from_gregorian_before_hijri_epoch() {
        let date = CalendarDate::gregorian(600, 1, 1).unwrap();
        assert!(matches!(
            from_gregorian(&date, CalendarType::SolarHijri),
            Err(InvalidDateError::DayOutOfRange { .. })
        ));
        assert!(matches!(
            from_gregorian(&date, CalendarType::LunarHijri),
            Err(InvalidDateError::DayOutOfRange { .. })
        ));
    }

    #[test]
    fn test_to_gregorian() {
        let date = CalendarDate::solar_hijri(1403, 5, 12).unwrap();
        assert_eq!(
            to_gregorian(&date).unwrap(),
            CalendarDate::gregorian(2024, 8, 2).unwrap()
        );

        let date = CalendarDate::lunar_hijri(1446, 1, 1).unwrap();
        assert_eq!(
            to_gregorian(&date).unwrap(),
            CalendarDate::gregorian(2024, 7, 8).unwrap()
        );
    }

    #[test]
    fn test_convert_between_hijri_calendars() {
        let shamsi = CalendarDate::solar_hijri(1403, 4, 18).unwrap();
        let qamari = convert(&shamsi, CalendarType::LunarHijri).unwrap();
        assert_eq!(qamari, CalendarDate::lunar_hijri(1446, 1, 1).unwrap());
        assert_eq!(convert(&qamari, CalendarType::SolarHijri).unwrap(), shamsi);
    }

    #[test]
    fn test_get_days_in_month() {
        assert_eq!(get_days_in_month(2000, 2, CalendarType::Gregorian).unwrap(), 29);
        assert_eq!(get_days_in_month(1900, 2, CalendarType::Gregorian).unwrap(), 28);
        assert_eq!(get_days_in_month(2024, 2, CalendarType::Gregorian).unwrap(), 29);
        assert_eq!(get_days_in_month(1403, 12, CalendarType::SolarHijri).unwrap(), 30);
        assert_eq!(get_days_in_month(1445, 9, CalendarType::LunarHijri).unwrap(), 30);
    }

    #[test]
    fn test_get_month_name() {
        assert_eq!(get_month_name(1, CalendarType::Gregorian).unwrap(), "January");
        assert_eq!(get_month_name(5, CalendarType::SolarHijri).unwrap(), "Mordad");
        assert_eq!(get_month_name(12, CalendarType::SolarHijri).unwrap(), "Esfand");
        assert_eq!(get_month_name(9, CalendarType::LunarHijri).unwrap(), "Ramadan");
        assert!(matches!(
            get_month_name(0, CalendarType::Gregorian),
            Err(InvalidDateError::InvalidMonth { month: 0 })
        ));
        assert!(get_month_name(13, CalendarType::LunarHijri).is_err());
    }

    #[test]
    fn test_month_name_in_persian() {
        assert_eq!(
            month_name_in(1, CalendarType::SolarHijri, Locale::Persian).unwrap(),
            "فروردین"
        );
        assert_eq!(
            month_name_in(9, CalendarType::LunarHijri, Locale::Persian).unwrap(),
            "رمضان"
        );
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Sat, Locale::English), "Saturday");
        assert_eq!(weekday_name(Weekday::Fri, Locale::Persian), "جمعه");
    }
}
