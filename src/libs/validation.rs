//! Shared validation predicates and the per-field error taxonomy.
//!
//! Every form field belongs to a [`FieldKind`]. When a field loses focus its
//! value is checked against the kind's canonical pattern with
//! [`check_field`], which yields one of two recoverable conditions:
//!
//! - [`FieldError::RequiredFieldEmpty`]: a mandatory field has no value
//! - [`FieldError::InvalidFormat`]: a non-empty value does not match the
//!   canonical pattern for its kind
//!
//! Neither condition is fatal. The presentation layer shows the error's
//! `Display` text next to the field and lets the operator keep editing.
//!
//! Form-level submission only cares whether any required field is still
//! empty; [`missing_required`] collects them and the caller reports a single
//! [`FormError`] without enumerating the fields.
//!
//! ## Patterns
//!
//! | Kind   | Pattern                                                  |
//! |--------|----------------------------------------------------------|
//! | Time   | `^([0-1]?[0-9]\|2[0-3]):[0-5][0-9]$`                     |
//! | Date   | `^(0[1-9]\|[12][0-9]\|3[01])/(0[1-9]\|1[0-2])/[0-9]{4}$` |
//! | Choice | `SIM` or `NÃO`                                           |
//! | Text   | anything                                                 |
//!
//! The date pattern is a format check only: `31/02/2024` is accepted.
//! Calendar correctness is not enforced anywhere in the crate. Only ASCII
//! digits match.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/[0-9]{4}$").expect("valid date regex"));

/// Affirmative answer of a yes/no choice field.
pub const CHOICE_YES: &str = "SIM";
/// Negative answer of a yes/no choice field. Also the default value.
pub const CHOICE_NO: &str = "NÃO";

/// The input category of a form field, deciding how it is normalized and
/// which pattern it is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// `HH:MM`, at most 5 characters.
    Time,
    /// `DD/MM/YYYY`, at most 10 characters.
    Date,
    /// Free text, stored as typed.
    Text,
    /// `SIM` / `NÃO`.
    Choice,
}

impl FieldKind {
    /// Human-readable hint shown after "Formato inválido. Use".
    pub fn format_hint(&self) -> &'static str {
        match self {
            FieldKind::Time => "HH:MM (ex: 14:30)",
            FieldKind::Date => "DD/MM/YYYY (ex: 25/12/2023)",
            FieldKind::Text => "texto livre",
            FieldKind::Choice => "SIM ou NÃO",
        }
    }

    /// Maximum number of characters a normalized value can hold.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            FieldKind::Time => Some(crate::libs::time_input::TIME_MAX_LEN),
            FieldKind::Date => Some(crate::libs::date_input::DATE_MAX_LEN),
            FieldKind::Text | FieldKind::Choice => None,
        }
    }

    /// Checks a non-empty value against the kind's canonical pattern.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldKind::Time => is_valid_time(value),
            FieldKind::Date => is_valid_date(value),
            FieldKind::Text => true,
            FieldKind::Choice => is_valid_choice(value),
        }
    }
}

/// Per-field validation failure raised at completion time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Campo obrigatório")]
    RequiredFieldEmpty,
    #[error("Formato inválido. Use {}", .0.format_hint())]
    InvalidFormat(FieldKind),
}

/// Form-level submission failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// At least one required field is empty. The count is only logged, the
    /// message never names the fields.
    #[error("Preencha todos os campos obrigatórios")]
    MissingRequiredFields { count: usize },
}

/// Returns `true` when `time` is a non-empty `H:MM` / `HH:MM` value with hours
/// in `0..=23` and minutes in `0..=59`.
pub fn is_valid_time(time: &str) -> bool {
    !time.is_empty() && TIME_RE.is_match(time)
}

/// Returns `true` when `date` is a non-empty `DD/MM/YYYY` value with day in
/// `01..=31` and month in `01..=12`. Day counts per month are not checked.
pub fn is_valid_date(date: &str) -> bool {
    !date.is_empty() && DATE_RE.is_match(date)
}

pub fn is_valid_choice(value: &str) -> bool {
    value == CHOICE_YES || value == CHOICE_NO
}

/// Validates a finished field value.
///
/// Required-ness is checked first, so an empty required field always reports
/// `RequiredFieldEmpty`. An empty optional field is valid.
pub fn check_field(kind: FieldKind, value: &str, required: bool) -> Result<(), FieldError> {
    if value.is_empty() {
        return if required { Err(FieldError::RequiredFieldEmpty) } else { Ok(()) };
    }

    if kind.matches(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat(kind))
    }
}

/// Collects the identifiers of required fields whose value is empty.
///
/// Works over any identifier type so the rule tables stay declarative: the
/// caller passes the `(id, value)` pairs of its form and the list of ids
/// that are mandatory for the current incident type.
pub fn missing_required<'a, Id, I>(values: I, required: &[Id]) -> Vec<Id>
where
    Id: Copy + PartialEq,
    I: IntoIterator<Item = (Id, &'a str)>,
{
    values
        .into_iter()
        .filter(|(id, value)| required.contains(id) && value.is_empty())
        .map(|(id, _)| id)
        .collect()
}
