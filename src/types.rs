use crate::consts::{
    GREGORIAN_SEPARATOR, HIJRI_SEPARATOR, MAX_GREGORIAN_YEAR, MAX_LUNAR_HIJRI_YEAR,
    MAX_SOLAR_HIJRI_YEAR, MIN_YEAR,
};
use crate::prelude::Display;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The calendars a date can be entered and displayed in.
///
/// The set is closed: every component takes the calendar as an explicit
/// argument and matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum CalendarType {
    /// Proleptic Gregorian calendar
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Solar Hijri (Jalali, Shamsi) civil calendar
    #[display(fmt = "solar_hijri")]
    SolarHijri,
    /// Tabular Lunar Hijri (Qamari) calendar
    #[display(fmt = "lunar_hijri")]
    LunarHijri,
}

/// Error returned when a calendar name does not match any [`CalendarType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported calendar type: {0:?}")]
pub struct UnsupportedCalendarError(pub String);

impl CalendarType {
    /// Every supported calendar, in declaration order
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::SolarHijri, Self::LunarHijri];

    /// Separator used between year, month and day in form input text
    pub const fn separator(self) -> char {
        match self {
            Self::Gregorian => GREGORIAN_SEPARATOR,
            Self::SolarHijri | Self::LunarHijri => HIJRI_SEPARATOR,
        }
    }

    /// Weekday that starts a week row in a month grid
    pub const fn first_weekday(self) -> Weekday {
        match self {
            Self::Gregorian => Weekday::Sun,
            Self::SolarHijri | Self::LunarHijri => Weekday::Sat,
        }
    }

    /// Supported years (inclusive) for this calendar
    pub const fn year_range(self) -> RangeInclusive<i32> {
        match self {
            Self::Gregorian => MIN_YEAR..=MAX_GREGORIAN_YEAR,
            Self::SolarHijri => MIN_YEAR..=MAX_SOLAR_HIJRI_YEAR,
            Self::LunarHijri => MIN_YEAR..=MAX_LUNAR_HIJRI_YEAR,
        }
    }

    /// Stable rank used to order equal days held in different calendars
    #[inline]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Gregorian => 0,
            Self::SolarHijri => 1,
            Self::LunarHijri => 2,
        }
    }
}

impl FromStr for CalendarType {
    type Err = UnsupportedCalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" | "miladi" => Ok(Self::Gregorian),
            "solar_hijri" | "solarhijri" | "shamsi" | "jalali" | "persian" => Ok(Self::SolarHijri),
            "lunar_hijri" | "lunarhijri" | "qamari" | "hijri" | "islamic" => Ok(Self::LunarHijri),
            _ => Err(UnsupportedCalendarError(s.to_owned())),
        }
    }
}

impl Serialize for CalendarType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Language used for month and weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Latin-script names (transliterated for the Hijri calendars)
    #[default]
    #[display(fmt = "en")]
    English,
    /// Persian-script names, Persian digits in long formats
    #[display(fmt = "fa")]
    Persian,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_display() {
        assert_eq!(CalendarType::Gregorian.to_string(), "gregorian");
        assert_eq!(CalendarType::SolarHijri.to_string(), "solar_hijri");
        assert_eq!(CalendarType::LunarHijri.to_string(), "lunar_hijri");
    }

    #[test]
    fn test_calendar_from_str_aliases() {
        struct TestCase {
            input: &'static str,
            expected: CalendarType,
        }

        let cases = [
            TestCase {
                input: "gregorian",
                expected: CalendarType::Gregorian,
            },
            TestCase {
                input: " Miladi ",
                expected: CalendarType::Gregorian,
            },
            TestCase {
                input: "shamsi",
                expected: CalendarType::SolarHijri,
            },
            TestCase {
                input: "JALALI",
                expected: CalendarType::SolarHijri,
            },
            TestCase {
                input: "solar_hijri",
                expected: CalendarType::SolarHijri,
            },
            TestCase {
                input: "qamari",
                expected: CalendarType::LunarHijri,
            },
            TestCase {
                input: "lunar_hijri",
                expected: CalendarType::LunarHijri,
            },
        ];

        for case in &cases {
            assert_eq!(
                case.input.parse::<CalendarType>().unwrap(),
                case.expected,
                "input {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_calendar_from_str_unsupported() {
        let result = "hebrew".parse::<CalendarType>();
        assert_eq!(result, Err(UnsupportedCalendarError("hebrew".to_owned())));

        let result = "".parse::<CalendarType>();
        assert!(result.is_err());
    }

    #[test]
    fn test_calendar_conventions() {
        assert_eq!(CalendarType::Gregorian.separator(), '-');
        assert_eq!(CalendarType::SolarHijri.separator(), '/');
        assert_eq!(CalendarType::LunarHijri.separator(), '/');
        assert_eq!(CalendarType::Gregorian.first_weekday(), Weekday::Sun);
        assert_eq!(CalendarType::SolarHijri.first_weekday(), Weekday::Sat);
        assert_eq!(*CalendarType::SolarHijri.year_range().end(), 3176);
    }

    #[test]
    fn test_calendar_serde() {
        let json = serde_json::to_string(&CalendarType::SolarHijri).unwrap();
        assert_eq!(json, r#""solar_hijri""#);

        let parsed: CalendarType = serde_json::from_str(r#""qamari""#).unwrap();
        assert_eq!(parsed, CalendarType::LunarHijri);

        let result: Result<CalendarType, _> = serde_json::from_str(r#""julian""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::Persian).unwrap();
        assert_eq!(json, r#""persian""#);
        assert_eq!(Locale::default(), Locale::English);
    }
}
