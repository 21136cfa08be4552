use crate::types::{CalendarType, Locale};
use chrono::Weekday;

const GREGORIAN_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const GREGORIAN_FA: [&str; 12] = [
    "ژانویه",
    "فوریه",
    "مارس",
    "آوریل",
    "مه",
    "ژوئن",
    "ژوئیه",
    "اوت",
    "سپتامبر",
    "اکتبر",
    "نوامبر",
    "دسامبر",
];

const SOLAR_HIJRI_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const SOLAR_HIJRI_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const LUNAR_HIJRI_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

const LUNAR_HIJRI_FA: [&str; 12] = [
    "محرم",
    "صفر",
    "ربیع‌الاول",
    "ربیع‌الثانی",
    "جمادی‌الاول",
    "جمادی‌الثانی",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذی‌القعده",
    "ذی‌الحجه",
];

/// Month name table for a calendar and locale, indexed by `month - 1`.
pub(crate) const fn month_names(
    calendar: CalendarType,
    locale: Locale,
) -> &'static [&'static str; 12] {
    match (calendar, locale) {
        (CalendarType::Gregorian, Locale::English) => &GREGORIAN_EN,
        (CalendarType::Gregorian, Locale::Persian) => &GREGORIAN_FA,
        (CalendarType::SolarHijri, Locale::English) => &SOLAR_HIJRI_EN,
        (CalendarType::SolarHijri, Locale::Persian) => &SOLAR_HIJRI_FA,
        (CalendarType::LunarHijri, Locale::English) => &LUNAR_HIJRI_EN,
        (CalendarType::LunarHijri, Locale::Persian) => &LUNAR_HIJRI_FA,
    }
}

pub(crate) const fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
        Locale::Persian => match weekday {
            Weekday::Mon => "دوشنبه",
            Weekday::Tue => "سه‌شنبه",
            Weekday::Wed => "چهارشنبه",
            Weekday::Thu => "پنجشنبه",
            Weekday::Fri => "جمعه",
            Weekday::Sat => "شنبه",
            Weekday::Sun => "یکشنبه",
        },
    }
}
