//! Keystroke normalization, finalization and validation of `HH:MM` fields.
//!
//! A time field goes through three stages:
//!
//! 1. **Typing** ([`normalize_time`], [`normalize_time_edit`]): every keystroke
//!    produces a new raw string which is cleaned and reshaped towards `HH:MM`.
//!    Partial input is kept editable: a single minute digit stays as typed and
//!    a bare trailing colon is preserved. Deleting characters is never
//!    reformatted.
//! 2. **Finalization** ([`finalize_time`]): when the field loses focus the
//!    value is completed to a strict `HH:MM` (`"7"` → `"07:00"`,
//!    `"14:3"` → `"14:03"`).
//! 3. **Validation** ([`validate_time`]): the finished value is checked
//!    against the canonical pattern and the field's required-ness.
//!
//! ## Typing examples
//!
//! | Raw      | Normalized |
//! |----------|------------|
//! | `"2"`    | `"2"`      |
//! | `"99"`   | `"23"`     |
//! | `"14:"`  | `"14:"`    |
//! | `"5:"`   | `"05:"`    |
//! | `"143"`  | `"14:3"`   |
//! | `"1430"` | `"14:30"`  |
//! | `"1475"` | `"14:59"`  |
//! | `"ab1x"` | `"1"`      |
//!
//! Normalized values never exceed [`TIME_MAX_LEN`] characters and only contain
//! digits and `:`. Already canonical values pass through unchanged.

use super::validation::{check_field, is_valid_time, FieldError, FieldKind};

/// Maximum length of a time field value (`HH:MM`).
pub const TIME_MAX_LEN: usize = 5;

const MAX_HOURS: u32 = 23;
const MAX_MINUTES: u32 = 59;

/// Reshapes raw keystroke input into (possibly partial) `HH:MM`.
///
/// # Examples
///
/// ```rust
/// use occurrence::libs::time_input::normalize_time;
///
/// assert_eq!(normalize_time("1430"), "14:30");
/// assert_eq!(normalize_time("99"), "23");
/// assert_eq!(normalize_time("14:"), "14:");
/// ```
pub fn normalize_time(raw: &str) -> String {
    let cleaned = clean(raw);

    match cleaned.split_once(':') {
        Some((hours, rest)) => {
            // Colons after the first one are dropped.
            let minutes = digits_only(rest);
            compose(clamp(hours, MAX_HOURS), &minutes)
        }
        None => match cleaned.len() {
            0 | 1 => cleaned,
            2 => format!("{:02}", clamp(&cleaned, MAX_HOURS)),
            _ => {
                let minutes = &cleaned[2..cleaned.len().min(4)];
                compose(clamp(&cleaned[..2], MAX_HOURS), minutes)
            }
        },
    }
}

/// Edit-aware variant of [`normalize_time`].
///
/// When `raw` is shorter than `previous` the operator is deleting, and the
/// value is accepted as typed (only foreign characters are removed) so
/// backspacing through `"14:30"` yields `"14:3"`, `"14:"`, `"14"`, ...
pub fn normalize_time_edit(previous: &str, raw: &str) -> String {
    if raw.chars().count() < previous.chars().count() {
        return clean(raw).chars().take(TIME_MAX_LEN).collect();
    }
    normalize_time(raw)
}

/// Completes a time value when its field loses focus.
///
/// - empty stays empty
/// - without a colon the value is read as hours only: `"7"` → `"07:00"`
/// - with a colon both parts are clamped and padded, missing minutes default
///   to `00`: `"14:"` → `"14:00"`, `"14:3"` → `"14:03"`
pub fn finalize_time(value: &str) -> String {
    let cleaned = clean(value);
    if cleaned.is_empty() {
        return cleaned;
    }

    match cleaned.split_once(':') {
        None => format!("{:02}:00", clamp(&cleaned, MAX_HOURS)),
        Some((hours, rest)) => {
            let minutes = digits_only(rest);
            let minutes = &minutes[..minutes.len().min(2)];
            format!("{:02}:{:02}", clamp(hours, MAX_HOURS), clamp(minutes, MAX_MINUTES))
        }
    }
}

/// Validates a finished time value.
pub fn validate_time(value: &str, required: bool) -> Result<(), FieldError> {
    check_field(FieldKind::Time, value, required)
}

/// Returns `true` once the value has reached the strict 5-character `HH:MM`
/// shape required by the duration calculation.
pub fn is_complete_time(value: &str) -> bool {
    value.len() == TIME_MAX_LEN && is_valid_time(value)
}

fn clean(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == ':').collect()
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parses a run of ASCII digits and clamps it to `max`. Empty input is zero;
/// overlong input saturates instead of overflowing.
fn clamp(digits: &str, max: u32) -> u32 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add(u32::from(b - b'0')))
        .min(max)
}

/// Renders clamped hours followed by the minutes typed so far.
fn compose(hours: u32, minutes: &str) -> String {
    match minutes.len() {
        0 => format!("{:02}:", hours),
        1 => format!("{:02}:{}", hours, minutes),
        _ => format!("{:02}:{:02}", hours, clamp(&minutes[..2], MAX_MINUTES)),
    }
}
