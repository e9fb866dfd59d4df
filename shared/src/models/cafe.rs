//! Cafe Model

use serde::{Deserialize, Serialize};

/// Cafe entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    /// Server-assigned identifier
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub location: String,
    /// Number of employees (derived by the server, never sent back)
    #[serde(default)]
    pub employees: u32,
}

/// Create cafe payload (the server assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub location: String,
}

/// Update cafe payload (`PUT /cafes` identifies the record by body id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeUpdate {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_employee_count_defaults_to_zero() {
        let cafe: Cafe = serde_json::from_str(
            r#"{"id":"c1","name":"Cafe ABC","location":"Orchard"}"#,
        )
        .unwrap();
        assert_eq!(cafe.employees, 0);
        assert!(cafe.description.is_none());
    }

    #[test]
    fn test_create_payload_has_no_id() {
        let payload = CafeCreate {
            name: "Cafe ABC".into(),
            description: None,
            logo: None,
            location: "Orchard".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["location"], "Orchard");
    }
}
