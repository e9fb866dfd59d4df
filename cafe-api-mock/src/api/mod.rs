//! REST routes

pub mod cafes;
pub mod employees;

use serde::{Deserialize, Deserializer};

/// Query values where `?location=` means "no filter"
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}
