//! Digit-script normalization for numeric and date text.
//!
//! Virtual keyboards and input methods mix Extended Arabic-Indic (Persian)
//! digits `۰-۹`, Arabic-Indic digits `٠-٩` and ASCII digits. Everything
//! here is a single pass over the input.

use crate::consts::{
    ARABIC_DECIMAL_SEPARATOR, ARABIC_INDIC_ZERO, DECIMAL_POINT, MINUS_SIGN, PERSIAN_ZERO,
};
use serde::{Deserialize, Serialize};

/// Which non-digit characters a numeric field accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumeralOptions {
    /// Accept one decimal separator (`.` or `٫`)
    pub allow_decimal: bool,
    /// Accept one leading minus sign
    pub allow_negative: bool,
}

impl NumeralOptions {
    /// Digits only
    pub const INTEGER: Self = Self {
        allow_decimal: false,
        allow_negative: false,
    };

    /// Digits and one decimal separator
    pub const DECIMAL: Self = Self {
        allow_decimal: true,
        allow_negative: false,
    };

    /// Digits, one decimal separator and a leading minus sign
    pub const SIGNED_DECIMAL: Self = Self {
        allow_decimal: true,
        allow_negative: true,
    };
}

/// Value of a digit in any supported script.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - PERSIAN_ZERO as u32),
        '\u{0660}'..='\u{0669}' => Some(c as u32 - ARABIC_INDIC_ZERO as u32),
        _ => None,
    }
}

/// Whether `c` is a digit in any supported script
pub fn is_digit(c: char) -> bool {
    digit_value(c).is_some()
}

const fn is_decimal_separator(c: char) -> bool {
    c == DECIMAL_POINT || c == ARABIC_DECIMAL_SEPARATOR
}

/// Replaces every Eastern Arabic-Indic digit with its ASCII equivalent.
/// All other characters pass through unchanged.
pub fn to_western_arabic(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '0'..='9' => c,
            _ => digit_value(c)
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or(c),
        })
        .collect()
}

/// Replaces every ASCII digit with its Persian (Extended Arabic-Indic) equivalent.
pub fn to_eastern_arabic(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| char::from_u32(PERSIAN_ZERO as u32 + d))
                .unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// True iff `s` has at least one digit and otherwise only what `options` permits:
/// one decimal separator, one minus sign in leading position.
pub fn is_valid_numeral(s: &str, options: NumeralOptions) -> bool {
    let mut seen_digit = false;
    let mut seen_separator = false;

    for (i, c) in s.chars().enumerate() {
        if is_digit(c) {
            seen_digit = true;
        } else if is_decimal_separator(c) && options.allow_decimal && !seen_separator {
            seen_separator = true;
        } else if c == MINUS_SIGN && options.allow_negative && i == 0 {
            // leading sign
        } else {
            return false;
        }
    }
    seen_digit
}

/// Drops every character that [`is_valid_numeral`] would reject, keeping
/// order and digit script. Idempotent.
pub fn sanitize(s: &str, options: NumeralOptions) -> String {
    let mut out = String::with_capacity(s.len());
    let mut seen_separator = false;

    for c in s.chars() {
        if is_digit(c) {
            out.push(c);
        } else if is_decimal_separator(c) && options.allow_decimal && !seen_separator {
            seen_separator = true;
            out.push(c);
        } else if c == MINUS_SIGN && options.allow_negative && out.is_empty() {
            out.push(c);
        }
    }
    out
}

/// Sanitizes and converts to ASCII: the result holds only `0-9`, at most one
/// `.` and at most one leading `-`.
pub fn normalize(s: &str, options: NumeralOptions) -> String {
    to_western_arabic(&sanitize(s, options))
        .chars()
        .map(|c| if c == ARABIC_DECIMAL_SEPARATOR { DECIMAL_POINT } else { c })
        .collect()
}
