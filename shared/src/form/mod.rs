//! Form schemas
//!
//! A form holds the raw text a user typed for one record. It only turns
//! into a typed payload after validation passes; otherwise it yields
//! [`FieldErrors`] keyed by field name.

mod cafe;
mod employee;

pub use cafe::CafeForm;
pub use employee::EmployeeForm;

use crate::validation::FieldErrors;

/// Common surface of the record forms
pub trait RecordForm: Clone + Default + PartialEq + Send + Sync {
    /// Field names in display order
    const FIELDS: &'static [&'static str];

    /// Current raw value of a field
    fn field(&self, name: &str) -> Option<&str>;

    /// Overwrite a field; returns `false` for unknown names
    fn set_field(&mut self, name: &str, value: String) -> bool;

    /// Run every field rule
    fn check(&self) -> Result<(), FieldErrors>;
}

/// `None` for blank input
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
