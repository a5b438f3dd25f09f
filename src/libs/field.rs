//! Per-field editing state owned by the presentation layer.
//!
//! A [`FieldState`] mirrors one input box: its current value, whether it has
//! focus, and whether it passed validation the last time it lost focus. The
//! normalizers themselves stay stateless; this record is what remembers the
//! previous value so deletions can be told apart from typing.

use super::date_input::normalize_date;
use super::time_input::{finalize_time, normalize_time_edit};
use super::validation::{check_field, FieldError, FieldKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub kind: FieldKind,
    pub required: bool,
    value: String,
    focused: bool,
    error: Option<FieldError>,
}

impl FieldState {
    pub fn new(kind: FieldKind, required: bool) -> Self {
        Self {
            kind,
            required,
            value: String::new(),
            focused: false,
            error: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Validity flag from the last completion signal. Fields that were never
    /// blurred are considered valid.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Applies a keystroke: `raw` is the full text of the box after the key.
    ///
    /// The result never exceeds the kind's maximum length.
    pub fn input(&mut self, raw: &str) -> &str {
        let value = match self.kind {
            FieldKind::Time => normalize_time_edit(&self.value, raw),
            FieldKind::Date => normalize_date(raw),
            FieldKind::Choice => raw.trim().to_uppercase(),
            FieldKind::Text => raw.to_string(),
        };
        self.value = match self.kind.max_len() {
            Some(max) => value.chars().take(max).collect(),
            None => value,
        };
        &self.value
    }

    /// Completion signal: finalizes time values, then validates.
    ///
    /// The outcome is stored as the field's validity flag and returned so the
    /// caller can show the inline message.
    pub fn blur(&mut self) -> Result<(), FieldError> {
        self.focused = false;

        if self.kind == FieldKind::Time {
            self.value = finalize_time(&self.value);
        }

        let result = check_field(self.kind, &self.value, self.required);
        self.error = result.clone().err();
        result
    }

    /// Inline message for an invalid field.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Replaces the value from outside the editing flow (reset, prefill).
    /// No normalization or validation is applied.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.focused = false;
        self.error = None;
    }
}
