//! Employee Model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" | "male" => Ok(Self::Male),
            "Female" | "female" => Ok(Self::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// Employee entity as listed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Client-chosen identifier (`UI` + 5-7 alphanumerics), immutable
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    #[serde(
        default,
        deserialize_with = "super::date::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    /// Cafe reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_id: Option<String>,
    /// Cafe name, filled in by the server on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_name: Option<String>,
}

/// Create employee payload (id supplied by the client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_id: Option<String>,
}

/// Update employee payload (`PUT /employees/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    /// Original id, carried unchanged
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_id: Option<String>,
}
