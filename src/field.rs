//! The boundary where form and request values become [`CalendarDate`]s.
//!
//! Form components hand over native dates, `{year, month, day}` parts or raw
//! text. [`DateInput`] names each shape explicitly and [`DateField`] pairs it
//! with the calendar the user picked, so nothing past this module ever sees an
//! untyped date.

use crate::convert::to_gregorian;
use crate::input::{format_date_for_input, parse_input_date};
use crate::prelude::*;
use crate::types::UnsupportedCalendarError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Any failure at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is not a valid date.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    /// The calendar name is not one of the supported calendars.
    #[error(transparent)]
    UnsupportedCalendar(#[from] UnsupportedCalendarError),
}

/// A date value as a form or request delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DateInput {
    /// A platform date picker value; always Gregorian.
    Native { date: NaiveDate },
    /// Components in the field's calendar.
    Parts { year: i32, month: u8, day: u8 },
    /// Free text in the field's calendar convention.
    Text { text: String },
}

impl DateInput {
    /// Resolves to a Gregorian date, reading parts and text in `calendar`.
    ///
    /// # Errors
    /// `InvalidDateError` if the value is not a valid date.
    pub fn resolve(
        &self,
        calendar: CalendarType,
    ) -> Result<Option<CalendarDate>, InvalidDateError> {
        match self {
            Self::Native { date } => CalendarDate::try_from(*date).map(Some),
            Self::Parts { year, month, day } => {
                let date = CalendarDate::new(*year, *month, *day, calendar)?;
                to_gregorian(&date).map(Some)
            }
            Self::Text { text } => parse_input_date(text, calendar),
        }
    }
}

/// A date field together with the calendar it was entered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateField {
    #[serde(default)]
    pub value: Option<DateInput>,
    pub calendar_type: CalendarType,
}

impl DateField {
    pub const fn new(value: Option<DateInput>, calendar_type: CalendarType) -> Self {
        Self {
            value,
            calendar_type,
        }
    }

    /// The Gregorian value to store; `None` when nothing was entered.
    ///
    /// # Errors
    /// `InvalidDateError` if a value was entered but is not a valid date.
    pub fn resolve(&self) -> Result<Option<CalendarDate>, InvalidDateError> {
        match &self.value {
            Some(input) => input.resolve(self.calendar_type),
            None => Ok(None),
        }
    }

    /// A stored date rendered back as text for this field's calendar.
    ///
    /// # Errors
    /// `DayOutOfRange` if the calendar cannot represent the stored day.
    pub fn display(&self, stored: Option<&CalendarDate>) -> Result<String, InvalidDateError> {
        format_date_for_input(stored, self.calendar_type)
    }
}

/// Parses text for a calendar named by string, as requests carry it.
///
/// # Errors
/// `UnsupportedCalendar` for an unknown calendar name, `InvalidDate` for bad text.
pub fn parse_field(text: &str, calendar: &str) -> Result<Option<CalendarDate>, Error> {
    let calendar = calendar.parse::<CalendarType>()?;
    Ok(parse_input_date(text, calendar)?)
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = InvalidDateError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        // chrono keeps month in 1..=12 and day in 1..=31
        Self::gregorian(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = InvalidDateError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        let gregorian = to_gregorian(&date)?;
        Self::from_ymd_opt(
            gregorian.year(),
            u32::from(gregorian.month()),
            u32::from(gregorian.day()),
        )
        .ok_or(InvalidDateError::DayOutOfRange {
            calendar: CalendarType::Gregorian,
            jdn: gregorian.jdn(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_adapter() {
        let native = NaiveDate::from_ymd_opt(2024, 8, 2).unwrap();
        let date = CalendarDate::try_from(native).unwrap();
        assert_eq!(date, CalendarDate::gregorian(2024, 8, 2).unwrap());

        let shamsi = CalendarDate::solar_hijri(1403, 5, 12).unwrap();
        assert_eq!(NaiveDate::try_from(shamsi).unwrap(), native);
    }

    #[test]
    fn test_native_adapter_rejects_year_zero() {
        let native = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        assert!(matches!(
            CalendarDate::try_from(native),
            Err(InvalidDateError::YearOutOfRange { year: 0, .. })
        ));
    }

    #[test]
    fn test_resolve_each_shape() {
        let expected = CalendarDate::gregorian(2024, 8, 2).unwrap();

        let native = DateInput::Native {
            date: NaiveDate::from_ymd_opt(2024, 8, 2).unwrap(),
        };
        assert_eq!(native.resolve(CalendarType::SolarHijri), Ok(Some(expected)));

        let parts = DateInput::Parts {
            year: 1403,
            month: 5,
            day: 12,
        };
        assert_eq!(parts.resolve(CalendarType::SolarHijri), Ok(Some(expected)));

        let text = DateInput::Text {
            text: "۱۴۰۳/۰۵/۱۲".to_owned(),
        };
        assert_eq!(text.resolve(CalendarType::SolarHijri), Ok(Some(expected)));

        let empty = DateInput::Text { text: String::new() };
        assert_eq!(empty.resolve(CalendarType::Gregorian), Ok(None));
    }

    #[test]
    fn test_field_from_request_json() {
        let field: DateField = serde_json::from_str(
            r#"{"value":{"kind":"text","text":"1446/01/01"},"calendarType":"qamari"}"#,
        )
        .unwrap();
        assert_eq!(field.calendar_type, CalendarType::LunarHijri);
        let stored = field.resolve().unwrap();
        assert_eq!(stored, Some(CalendarDate::gregorian(2024, 7, 8).unwrap()));
        assert_eq!(field.display(stored.as_ref()).unwrap(), "1446/01/01");

        let field: DateField = serde_json::from_str(
            r#"{"value":{"kind":"native","date":"2024-03-20"},"calendarType":"shamsi"}"#,
        )
        .unwrap();
        let stored = field.resolve().unwrap();
        assert_eq!(field.display(stored.as_ref()).unwrap(), "1403/01/01");
    }

    #[test]
    fn test_field_without_value() {
        let field: DateField = serde_json::from_str(r#"{"calendarType":"gregorian"}"#).unwrap();
        assert_eq!(field.resolve(), Ok(None));
        assert_eq!(field.display(None).unwrap(), "");
    }

    #[test]
    fn test_field_rejects_bad_parts() {
        let field = DateField::new(
            Some(DateInput::Parts {
                year: 1404,
                month: 12,
                day: 30,
            }),
            CalendarType::SolarHijri,
        );
        assert!(matches!(field.resolve(), Err(InvalidDateError::InvalidDay { .. })));
    }

    #[test]
    fn test_field_rejects_unknown_calendar() {
        let result: Result<DateField, _> =
            serde_json::from_str(r#"{"value":null,"calendarType":"mayan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("2024-02-29", "gregorian"),
            Ok(Some(CalendarDate::gregorian(2024, 2, 29).unwrap()))
        );
        assert_eq!(parse_field("", "jalali"), Ok(None));
        assert_eq!(
            parse_field("2024-02-29", "hebrew"),
            Err(Error::UnsupportedCalendar(UnsupportedCalendarError(
                "hebrew".to_owned()
            )))
        );
        assert!(matches!(
            parse_field("1402/12/30", "shamsi"),
            Err(Error::InvalidDate(InvalidDateError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err = Error::from(InvalidDateError::InvalidMonth { month: 0 });
        assert_eq!(err.to_string(), "Invalid month: 0 (must be 1-12)");

        let err = Error::from(UnsupportedCalendarError("x".to_owned()));
        assert_eq!(err.to_string(), r#"Unsupported calendar type: "x""#);
    }
}
