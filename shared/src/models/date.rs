//! Lenient start-date decoding
//!
//! Backends send `startDate` either as a plain calendar date
//! (`2024-03-01`), as a full timestamp (`2024-03-01T00:00:00.000Z`), as an
//! empty string or not at all. Everything that is not a readable date
//! decodes as `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Parse the calendar-date prefix of a date or timestamp string
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let prefix = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

pub fn lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_calendar_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_calendar_date("2024-03-01"), expected);
        assert_eq!(parse_calendar_date("2024-03-01T00:00:00.000Z"), expected);
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("01/03/2024"), None);
    }
}
