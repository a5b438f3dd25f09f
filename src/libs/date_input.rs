//! Keystroke normalization and validation of `DD/MM/YYYY` fields.
//!
//! Unlike time fields, dates are never clamped while typing. Digits are only
//! grouped, and range checks on day and month happen at validation time.

use super::validation::{check_field, FieldError, FieldKind};

/// Maximum length of a date field value (`DD/MM/YYYY`).
pub const DATE_MAX_LEN: usize = 10;

const MAX_DIGITS: usize = 8;

/// Groups the digits of `raw` as `DD/MM/YYYY`.
///
/// Non-digits are dropped and anything past the eighth digit is truncated. A
/// separator is inserted once the following group has started, so `"12"`
/// stays `"12"` and `"123"` becomes `"12/3"`.
///
/// ```rust
/// use occurrence::libs::date_input::normalize_date;
///
/// assert_eq!(normalize_date("25122023"), "25/12/2023");
/// assert_eq!(normalize_date("25/12/2023"), "25/12/2023");
/// ```
pub fn normalize_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(MAX_DIGITS).collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Validates a finished date value. Calendar correctness is not checked:
/// `31/02/2024` passes.
pub fn validate_date(value: &str, required: bool) -> Result<(), FieldError> {
    check_field(FieldKind::Date, value, required)
}
