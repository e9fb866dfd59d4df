//! Field validation helpers
//!
//! Patterns and limits for the form schemas, plus [`FieldErrors`], the
//! per-field error map shown inline next to each form field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationErrors;

// ── Limits ──────────────────────────────────────────────────────────

/// Cafe names: 6 to 10 characters
pub const CAFE_NAME_MIN_LEN: usize = 6;
pub const CAFE_NAME_MAX_LEN: usize = 10;

/// Cafe descriptions
pub const MAX_DESCRIPTION_LEN: usize = 256;

// ── Patterns ────────────────────────────────────────────────────────

/// `UI` followed by 5 to 7 alphanumerics
pub static EMPLOYEE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UI[A-Za-z0-9]{5,7}$").expect("employee id pattern"));

/// Anything shaped like `local@domain`
pub static EMAIL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("email pattern"));

/// 8 digits starting with 8 or 9
pub static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[89]\d{7}$").expect("phone pattern"));

pub fn is_employee_id(value: &str) -> bool {
    EMPLOYEE_ID.is_match(value)
}

pub fn is_phone_number(value: &str) -> bool {
    PHONE_NUMBER.is_match(value)
}

pub fn is_email_address(value: &str) -> bool {
    EMAIL_ADDRESS.is_match(value)
}

// ── FieldErrors ─────────────────────────────────────────────────────

/// Validation failures keyed by form field name.
///
/// Only the first message per field is kept, which is what a form shows
/// under the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the field already has one
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.errors.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            if let Some(err) = errs.first() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.insert(field.to_string(), message);
            }
        }
        out
    }
}
