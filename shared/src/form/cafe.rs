use validator::Validate;

use super::{RecordForm, non_empty};
use crate::models::{Cafe, CafeCreate, CafeUpdate};
use crate::validation::FieldErrors;

/// Cafe add/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CafeForm {
    #[validate(length(min = 6, max = 10, message = "Name must be 6-10 characters"))]
    pub name: String,
    #[validate(length(max = 256, message = "Max 256 characters"))]
    pub description: String,
    pub logo: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
}

impl CafeForm {
    /// Payload for `POST /cafes`
    pub fn to_create(&self) -> Result<CafeCreate, FieldErrors> {
        let form = self.trimmed();
        form.validate()?;
        Ok(CafeCreate {
            name: form.name,
            description: non_empty(&form.description),
            logo: non_empty(&form.logo),
            location: form.location,
        })
    }

    /// Copy with surrounding whitespace removed; the rules and the payload
    /// both see these values
    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            logo: self.logo.trim().to_string(),
            location: self.location.trim().to_string(),
        }
    }

    /// Payload for `PUT /cafes`, carrying the original id
    pub fn to_update(&self, id: &str) -> Result<CafeUpdate, FieldErrors> {
        let create = self.to_create()?;
        Ok(CafeUpdate {
            id: id.to_string(),
            name: create.name,
            description: create.description,
            logo: create.logo,
            location: create.location,
        })
    }
}

impl From<&Cafe> for CafeForm {
    fn from(cafe: &Cafe) -> Self {
        Self {
            name: cafe.name.clone(),
            description: cafe.description.clone().unwrap_or_default(),
            logo: cafe.logo.clone().unwrap_or_default(),
            location: cafe.location.clone(),
        }
    }
}

impl RecordForm for CafeForm {
    const FIELDS: &'static [&'static str] = &["name", "description", "logo", "location"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "logo" => Some(&self.logo),
            "location" => Some(&self.location),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "description" => &mut self.description,
            "logo" => &mut self.logo,
            "location" => &mut self.location,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn check(&self) -> Result<(), FieldErrors> {
        self.trimmed().validate().map_err(FieldErrors::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, description: &str) -> CafeForm {
        CafeForm {
            name: name.into(),
            description: description.into(),
            logo: String::new(),
            location: "Orchard".into(),
        }
    }

    #[test]
    fn test_name_length_bounds() {
        for name in ["Cafe A", "CafeABCDEF", "Cafe ABC"] {
            assert!(form(name, "").to_create().is_ok(), "{name} should pass");
        }
        for name in ["", "Cafe", "CafeA", "Cafe ABCDEF"] {
            let errors = form(name, "").to_create().unwrap_err();
            assert_eq!(errors.get("name"), Some("Name must be 6-10 characters"));
        }
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(form("Café Été", "").to_create().is_ok());
    }

    #[test]
    fn test_description_limit() {
        assert!(form("Cafe ABC", &"x".repeat(256)).to_create().is_ok());
        let errors = form("Cafe ABC", &"x".repeat(257)).to_create().unwrap_err();
        assert_eq!(errors.get("description"), Some("Max 256 characters"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_location_required() {
        let mut f = form("Cafe ABC", "");
        f.location.clear();
        let errors = f.check().unwrap_err();
        assert_eq!(errors.get("location"), Some("Location is required"));
    }

    #[test]
    fn test_whitespace_only_fields_are_blank() {
        let f = CafeForm {
            name: "      ".into(),
            location: "   ".into(),
            ..CafeForm::default()
        };
        let errors = f.to_create().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must be 6-10 characters"));
        assert_eq!(errors.get("location"), Some("Location is required"));
        assert_eq!(f.check().unwrap_err(), errors);
    }

    #[test]
    fn test_padding_is_not_counted_or_sent() {
        let payload = form("  Cafe  ", "").to_create();
        assert_eq!(
            payload.unwrap_err().get("name"),
            Some("Name must be 6-10 characters")
        );

        let payload = form(" Cafe ABC ", "").to_create().unwrap();
        assert_eq!(payload.name, "Cafe ABC");
    }

    #[test]
    fn test_fields_are_all_addressable() {
        let mut f = CafeForm::default();
        for field in CafeForm::FIELDS {
            assert!(f.set_field(field, format!("{field}!")), "{field}");
            assert_eq!(f.field(field), Some(format!("{field}!").as_str()));
        }
    }

    #[test]
    fn test_blank_optionals_are_omitted() {
        let payload = form("Cafe ABC", "  ").to_create().unwrap();
        assert!(payload.description.is_none());
        assert!(payload.logo.is_none());
    }

    #[test]
    fn test_update_carries_id_and_prefill_round_trips() {
        let cafe = Cafe {
            id: "c-1".into(),
            name: "Cafe ABC".into(),
            description: Some("Espresso bar".into()),
            logo: None,
            location: "Tampines".into(),
            employees: 3,
        };
        let f = CafeForm::from(&cafe);
        assert_eq!(f.field("description"), Some("Espresso bar"));
        let update = f.to_update(&cafe.id).unwrap();
        assert_eq!(update.id, "c-1");
        assert_eq!(update.location, "Tampines");
    }

    #[test]
    fn test_set_field() {
        let mut f = CafeForm::default();
        assert!(f.set_field("name", "Cafe XYZ".into()));
        assert!(!f.set_field("employees", "4".into()));
        assert_eq!(f.name, "Cafe XYZ");
    }
}
