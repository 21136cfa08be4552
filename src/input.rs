//! Text ⇄ date translation for form fields.
//!
//! Gregorian fields use `YYYY-MM-DD`, Solar and Lunar Hijri fields use
//! `YYYY/MM/DD`. Parsing accepts either separator (but not both) and any
//! digit script. Empty text means "nothing entered" and is not an error.

use crate::consts::{GREGORIAN_SEPARATOR, HIJRI_SEPARATOR, MIN_DAY};
use crate::convert::{convert, get_days_in_month, month_name_in, to_gregorian};
use crate::numerals::{to_eastern_arabic, to_western_arabic};
use crate::prelude::*;
use crate::types::Locale;
use std::str::FromStr;

/// Parses form text entered in `calendar` and returns the Gregorian date.
///
/// Returns `Ok(None)` for empty or whitespace-only text.
///
/// # Errors
/// `InvalidDateError` for any non-empty text that is not a valid date in `calendar`.
pub fn parse_input_date(
    text: &str,
    calendar: CalendarType,
) -> Result<Option<CalendarDate>, InvalidDateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let western = to_western_arabic(trimmed);
    let date = parse_in_calendar(&western, calendar).inspect_err(|err| {
        tracing::debug!(input = %trimmed, %calendar, error = %err, "rejected date input");
    })?;
    to_gregorian(&date).map(Some)
}

/// Parses `YYYY?MM?DD` (ASCII digits) into a date of `calendar` without converting it.
///
/// # Errors
/// `InvalidFormat` for malformed text, or the range error of the offending component.
pub fn parse_in_calendar(
    text: &str,
    calendar: CalendarType,
) -> Result<CalendarDate, InvalidDateError> {
    let has_hyphen = text.contains(GREGORIAN_SEPARATOR);
    let has_slash = text.contains(HIJRI_SEPARATOR);

    if has_hyphen && has_slash {
        return Err(InvalidDateError::InvalidFormat(format!(
            "Mixed delimiters ({GREGORIAN_SEPARATOR} and {HIJRI_SEPARATOR}) in {text:?}"
        )));
    }

    let separator = if has_slash {
        HIJRI_SEPARATOR
    } else {
        GREGORIAN_SEPARATOR
    };
    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(InvalidDateError::InvalidFormat(format!(
            "Expected year{sep}month{sep}day, found {text:?}",
            sep = calendar.separator()
        )));
    }

    let year = parse_component::<i32>(parts[0])?;
    let month = parse_component::<u8>(parts[1])?;
    let day = parse_component::<u8>(parts[2])?;

    let max_day = get_days_in_month(year, month, calendar)?;
    if day < MIN_DAY || day > max_day {
        return Err(InvalidDateError::InvalidDay {
            calendar,
            year,
            month,
            day,
        });
    }
    CalendarDate::new(year, month, day, calendar)
}

/// Helper to parse an unsigned decimal component with better error messages
fn parse_component<T: FromStr>(s: &str) -> Result<T, InvalidDateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidDateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| InvalidDateError::InvalidFormat(s.to_owned()))
}

/// Formats a stored date as form text in `calendar`; `None` gives `""`.
///
/// # Errors
/// `DayOutOfRange` if `calendar` cannot represent the day.
pub fn format_date_for_input(
    date: Option<&CalendarDate>,
    calendar: CalendarType,
) -> Result<String, InvalidDateError> {
    let Some(date) = date else {
        return Ok(String::new());
    };
    Ok(convert(date, calendar)?.to_string())
}

/// Long form for reports and printouts, e.g. `12 Mordad 1403`.
///
/// The Persian locale uses Persian month names and Persian digits.
///
/// # Errors
/// `DayOutOfRange` if `calendar` cannot represent the day.
pub fn format_date_long(
    date: &CalendarDate,
    calendar: CalendarType,
    locale: Locale,
) -> Result<String, InvalidDateError> {
    let date = convert(date, calendar)?;
    let name = month_name_in(date.month(), calendar, locale)?;
    let text = format!("{} {} {}", date.day(), name, date.year());
    Ok(match locale {
        Locale::English => text,
        Locale::Persian => to_eastern_arabic(&text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(parse_input_date("", CalendarType::Gregorian), Ok(None));
        assert_eq!(parse_input_date("   ", CalendarType::SolarHijri), Ok(None));
    }

    #[test]
    fn test_parse_gregorian() {
        let date = parse_input_date("2024-08-02", CalendarType::Gregorian)
            .unwrap()
            .unwrap();
        assert_eq!(date, CalendarDate::gregorian(2024, 8, 2).unwrap());
    }

    #[test]
    fn test_parse_solar_hijri_persian_digits() {
        let date = parse_input_date("۱۴۰۳/۰۵/۱۲", CalendarType::SolarHijri)
            .unwrap()
            .unwrap();
        assert_eq!(date, CalendarDate::gregorian(2024, 8, 2).unwrap());
    }

    #[test]
    fn test_parse_lunar_hijri() {
        let date = parse_input_date(" 1446/1/1 ", CalendarType::LunarHijri)
            .unwrap()
            .unwrap();
        assert_eq!(date, CalendarDate::gregorian(2024, 7, 8).unwrap());
    }

    #[test]
    fn test_parse_accepts_either_separator() {
        let slash = parse_input_date("2024/02/29", CalendarType::Gregorian).unwrap();
        let hyphen = parse_input_date("1402-12-29", CalendarType::SolarHijri).unwrap();
        assert_eq!(slash, Some(CalendarDate::gregorian(2024, 2, 29).unwrap()));
        assert_eq!(hyphen, Some(CalendarDate::gregorian(2024, 3, 19).unwrap()));
    }

    #[test]
    fn test_parse_out_of_range_components() {
        assert!(matches!(
            parse_input_date("2024-13-40", CalendarType::Gregorian),
            Err(InvalidDateError::InvalidMonth { month: 13 })
        ));
        assert!(matches!(
            parse_input_date("2023-02-29", CalendarType::Gregorian),
            Err(InvalidDateError::InvalidDay { day: 29, .. })
        ));
        assert!(matches!(
            parse_input_date("1402/12/30", CalendarType::SolarHijri),
            Err(InvalidDateError::InvalidDay { day: 30, .. })
        ));
        assert!(matches!(
            parse_input_date("0000-01-01", CalendarType::Gregorian),
            Err(InvalidDateError::YearOutOfRange { year: 0, .. })
        ));
    }

    #[test]
    fn test_parse_malformed() {
        let malformed = [
            "2024-08",
            "2024-08-02-01",
            "2024/08-02",
            "20x4-08-02",
            "2024--02",
            "2024-+8-02",
            "2024-08-300",
            "yesterday",
        ];
        for text in malformed {
            assert!(
                matches!(
                    parse_input_date(text, CalendarType::Gregorian),
                    Err(InvalidDateError::InvalidFormat(_))
                ),
                "{text:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_parse_in_calendar_keeps_calendar() {
        let date = parse_in_calendar("1403/05/12", CalendarType::SolarHijri).unwrap();
        assert_eq!(date.calendar(), CalendarType::SolarHijri);
        assert_eq!(date.to_columns(), (1403, 5, 12, CalendarType::SolarHijri));
    }

    #[test]
    fn test_format_date_for_input() {
        let date = CalendarDate::gregorian(2024, 8, 2).unwrap();
        assert_eq!(
            format_date_for_input(Some(&date), CalendarType::Gregorian).unwrap(),
            "2024-08-02"
        );
        assert_eq!(
            format_date_for_input(Some(&date), CalendarType::SolarHijri).unwrap(),
            "1403/05/12"
        );
        assert_eq!(format_date_for_input(None, CalendarType::LunarHijri).unwrap(), "");
    }

    #[test]
    fn test_format_parse_round_trip() {
        let date = CalendarDate::lunar_hijri(1445, 12, 30).unwrap();
        let gregorian = to_gregorian(&date).unwrap();
        for calendar in CalendarType::ALL {
            let text = format_date_for_input(Some(&gregorian), calendar).unwrap();
            let parsed = parse_input_date(&text, calendar).unwrap();
            assert_eq!(parsed, Some(gregorian), "{calendar}: {text}");
        }
    }

    #[test]
    fn test_format_date_long() {
        let date = CalendarDate::gregorian(2024, 8, 2).unwrap();
        assert_eq!(
            format_date_long(&date, CalendarType::SolarHijri, Locale::English).unwrap(),
            "12 Mordad 1403"
        );
        assert_eq!(
            format_date_long(&date, CalendarType::SolarHijri, Locale::Persian).unwrap(),
            "۱۲ مرداد ۱۴۰۳"
        );
        assert_eq!(
            format_date_long(&date, CalendarType::Gregorian, Locale::English).unwrap(),
            "2 August 2024"
        );
    }
}
