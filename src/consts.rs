/// Maximum valid month (the twelfth month in every supported calendar)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number of the first month of the year
pub const FIRST_MONTH: u8 = 1;
/// Month number of the last month of the year
pub const LAST_MONTH: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Smallest year accepted by any calendar (no calendar here has a year zero)
pub const MIN_YEAR: i32 = 1;
/// Largest supported Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: i32 = 9999;
/// Largest supported Solar Hijri year (inclusive).
/// The break table stops at 3178 and converting late-year days looks one year ahead.
pub const MAX_SOLAR_HIJRI_YEAR: i32 = 3176;
/// Largest supported Lunar Hijri year (inclusive); 9666 runs past Gregorian 9999.
pub const MAX_LUNAR_HIJRI_YEAR: i32 = 9665;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Solar Hijri: months 1-6 have 31 days
pub const SOLAR_HIJRI_LONG_MONTH_DAYS: u8 = 31;
/// Solar Hijri: months 7-11 have 30 days
pub const SOLAR_HIJRI_SHORT_MONTH_DAYS: u8 = 30;
/// Solar Hijri: Esfand outside leap years
pub const SOLAR_HIJRI_LAST_MONTH_DAYS: u8 = 29;
/// Last Solar Hijri month with 31 days
pub(crate) const SOLAR_HIJRI_LAST_LONG_MONTH: u8 = 6;
/// Days in the first six Solar Hijri months
pub(crate) const SOLAR_HIJRI_FIRST_HALF_DAYS: i64 = 186;

/// Jalali years at which the 33-year leap pattern is re-anchored.
/// Valid for years in `BREAKS[0]..BREAKS[last]`.
pub(crate) const SOLAR_HIJRI_BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];
/// Offset between a Solar Hijri year and the Gregorian year it starts in
pub(crate) const SOLAR_HIJRI_GREGORIAN_OFFSET: i32 = 621;

/// Lunar Hijri: odd months have 30 days
pub const LUNAR_HIJRI_ODD_MONTH_DAYS: u8 = 30;
/// Lunar Hijri: even months have 29 days (Dhu al-Hijjah gains one in leap years)
pub const LUNAR_HIJRI_EVEN_MONTH_DAYS: u8 = 29;
/// JDN of 1 Muharram 1 AH (16 July 622 Julian), civil epoch
pub const LUNAR_HIJRI_EPOCH_JDN: i64 = 1_948_440;
/// Length of the tabular 30-year cycle in days
pub(crate) const LUNAR_HIJRI_CYCLE_DAYS: i64 = 10_631;
/// Days in a common tabular year
pub(crate) const LUNAR_HIJRI_COMMON_YEAR_DAYS: i64 = 354;

/// Number of days in a week
pub const DAYS_PER_WEEK: usize = 7;

/// Gregorian input separator (ISO 8601 style)
pub const GREGORIAN_SEPARATOR: char = '-';
/// Solar and Lunar Hijri input separator
pub const HIJRI_SEPARATOR: char = '/';

/// ASCII decimal point
pub const DECIMAL_POINT: char = '.';
/// Arabic decimal separator (U+066B)
pub const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';
/// Minus sign accepted in numeric input
pub const MINUS_SIGN: char = '-';
/// Extended Arabic-Indic (Persian) digit zero, U+06F0
pub const PERSIAN_ZERO: char = '\u{06F0}';
/// Arabic-Indic digit zero, U+0660
pub const ARABIC_INDIC_ZERO: char = '\u{0660}';
