//! Elapsed-time calculation and formatting for incident reports.
//!
//! This module turns two wall-clock readings taken from the form (`HH:MM`)
//! into the "total time" line of a report.
//!
//! ## Features
//!
//! - **Midnight Rollover**: An end time earlier than the start time is read
//!   as belonging to the following day
//! - **Compact Output**: `"45m"`, `"2h"`, `"2h 30m"`
//! - **Soft Failure**: Missing or malformed readings yield an empty string,
//!   meaning "not yet computable", never an error
//!
//! ## Format Specifications
//!
//! | Elapsed        | Output     |
//! |----------------|------------|
//! | 0 minutes      | `"0m"`     |
//! | 45 minutes     | `"45m"`    |
//! | 2 hours        | `"2h"`     |
//! | 2 h 30 minutes | `"2h 30m"` |
//!
//! Spans are limited to less than 24 hours; there is no multi-day support.
//!
//! ## Examples
//!
//! ```rust
//! use occurrence::libs::formatter::compute_duration;
//!
//! assert_eq!(compute_duration("08:00", "10:30"), "2h 30m");
//! assert_eq!(compute_duration("23:30", "00:15"), "45m");
//! assert_eq!(compute_duration("", "10:00"), "");
//! ```

use chrono::{Duration, NaiveTime};

/// Computes the elapsed time between two `HH:MM` readings.
///
/// Returns an empty string when either reading is empty or cannot be parsed
/// as a valid time of day.
pub fn compute_duration(start: &str, end: &str) -> String {
    match (parse_clock(start), parse_clock(end)) {
        (Some(start), Some(end)) => format_elapsed(&elapsed_between(start, end)),
        _ => String::new(),
    }
}

/// Wall-clock span from `start` to `end`, wrapping past midnight when `end`
/// is earlier than `start`. Always in `0..24h`.
pub fn elapsed_between(start: NaiveTime, end: NaiveTime) -> Duration {
    let span = end.signed_duration_since(start);
    if span < Duration::zero() {
        span + Duration::days(1)
    } else {
        span
    }
}

/// Formats a duration as `"<h>h <m>m"`, dropping the zero term.
///
/// Hours come first in the decision: a duration under one hour is always
/// rendered in minutes, so zero is `"0m"`. Negative durations are treated as
/// zero.
///
/// ```rust
/// use chrono::Duration;
/// use occurrence::libs::formatter::format_elapsed;
///
/// assert_eq!(format_elapsed(&Duration::minutes(150)), "2h 30m");
/// assert_eq!(format_elapsed(&Duration::hours(2)), "2h");
/// assert_eq!(format_elapsed(&Duration::zero()), "0m");
/// ```
pub fn format_elapsed(duration: &Duration) -> String {
    let total = duration.num_minutes().max(0);
    let hours = total / 60;
    let minutes = total % 60;

    if hours == 0 {
        format!("{}m", minutes)
    } else if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// Parses `H:MM` / `HH:MM` into a time of day.
fn parse_clock(value: &str) -> Option<NaiveTime> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let numeric = |part: &str| !part.is_empty() && part.len() <= 2 && part.chars().all(|c| c.is_ascii_digit());
    if !numeric(hours) || !numeric(minutes) {
        return None;
    }

    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}
