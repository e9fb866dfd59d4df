//! In-memory store
//!
//! Cafés and employees share one lock: a café delete cascades to its
//! employees and café rows report their employee count.

use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::validation::{
    CAFE_NAME_MAX_LEN, CAFE_NAME_MIN_LEN, MAX_DESCRIPTION_LEN, is_email_address, is_employee_id,
    is_phone_number,
};
use shared::{Cafe, CafeCreate, CafeUpdate, Employee, EmployeeCreate, EmployeeUpdate, Gender};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
struct CafeRow {
    id: String,
    name: String,
    description: Option<String>,
    logo: Option<String>,
    location: String,
}

#[derive(Debug, Clone)]
struct EmployeeRow {
    id: String,
    name: String,
    email_address: String,
    phone_number: String,
    gender: Gender,
    start_date: NaiveDate,
    cafe_id: Option<String>,
}

#[derive(Debug, Default)]
struct Data {
    cafes: Vec<CafeRow>,
    employees: Vec<EmployeeRow>,
}

impl Data {
    fn cafe(&self, id: &str) -> Option<&CafeRow> {
        self.cafes.iter().find(|c| c.id == id)
    }

    fn cafe_view(&self, row: &CafeRow) -> Cafe {
        let employees = self
            .employees
            .iter()
            .filter(|e| e.cafe_id.as_deref() == Some(row.id.as_str()))
            .count() as u32;
        Cafe {
            id: row.id.clone(),
            name: row.name.clone(),
            description: row.description.clone(),
            logo: row.logo.clone(),
            location: row.location.clone(),
            employees,
        }
    }

    fn employee_view(&self, row: &EmployeeRow) -> Employee {
        let cafe = row.cafe_id.as_deref().and_then(|id| self.cafe(id));
        Employee {
            id: row.id.clone(),
            name: row.name.clone(),
            email_address: row.email_address.clone(),
            phone_number: row.phone_number.clone(),
            gender: row.gender,
            start_date: Some(row.start_date),
            cafe_id: cafe.map(|c| c.id.clone()),
            cafe_name: cafe.map(|c| c.name.clone()),
        }
    }

    fn check_cafe_ref(&self, cafe_id: Option<&str>) -> AppResult<()> {
        match cafe_id {
            Some(id) if self.cafe(id).is_none() => {
                Err(AppError::validation(format!("Cafe {id} does not exist")))
            }
            _ => Ok(()),
        }
    }
}

/// Shared backend state
#[derive(Debug, Default)]
pub struct Store {
    data: RwLock<Data>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a few cafés and employees for manual runs
    pub fn seeded() -> Self {
        let store = Self::new();
        let seeds = [
            ("Cafe ABC", "Orchard", "Single-origin pour overs"),
            ("Bean Town", "Tampines", "Neighbourhood espresso bar"),
            ("Kopi Corner", "Orchard", "Traditional kopi and kaya toast"),
        ];
        let mut cafe_ids = Vec::new();
        for (name, location, description) in seeds {
            let created = store.create_cafe(CafeCreate {
                name: name.to_string(),
                description: Some(description.to_string()),
                logo: None,
                location: location.to_string(),
            });
            if let Ok(cafe) = created {
                cafe_ids.push(cafe.id);
            }
        }

        let people = [
            ("UIAB123", "Alice Tan", Gender::Female, "2023-01-15", 0),
            ("UICD456", "Bob Lim", Gender::Male, "2023-06-01", 0),
            ("UIEF789", "Chen Wei", Gender::Male, "2024-02-20", 1),
            ("UIGH012", "Dana Ng", Gender::Female, "2024-08-05", 2),
        ];
        for (i, (id, name, gender, start, cafe)) in people.into_iter().enumerate() {
            let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap_or_default();
            let _ = store.create_employee(EmployeeCreate {
                id: id.to_string(),
                name: name.to_string(),
                email_address: format!("{}@example.com", id.to_lowercase()),
                phone_number: format!("9{:07}", 1_234_560 + i),
                gender,
                start_date,
                cafe_id: cafe_ids.get(cafe).cloned(),
            });
        }
        store
    }

    // ========== Cafes ==========

    /// Cafés, optionally by exact location, most employees first
    pub fn list_cafes(&self, location: Option<&str>) -> Vec<Cafe> {
        let data = self.data.read();
        let mut cafes: Vec<Cafe> = data
            .cafes
            .iter()
            .filter(|c| location.is_none_or(|l| c.location == l))
            .map(|c| data.cafe_view(c))
            .collect();
        cafes.sort_by(|a, b| b.employees.cmp(&a.employees));
        cafes
    }

    pub fn create_cafe(&self, payload: CafeCreate) -> AppResult<Cafe> {
        validate_cafe(&payload.name, payload.description.as_deref(), &payload.location)?;
        let row = CafeRow {
            id: uuid::Uuid::new_v4().to_string(),
            name: payload.name,
            description: payload.description,
            logo: payload.logo,
            location: payload.location,
        };
        let mut data = self.data.write();
        let cafe = data.cafe_view(&row);
        data.cafes.push(row);
        tracing::info!(id = %cafe.id, name = %cafe.name, "cafe created");
        Ok(cafe)
    }

    pub fn update_cafe(&self, payload: CafeUpdate) -> AppResult<Cafe> {
        validate_cafe(&payload.name, payload.description.as_deref(), &payload.location)?;
        let mut data = self.data.write();
        let row = data
            .cafes
            .iter_mut()
            .find(|c| c.id == payload.id)
            .ok_or_else(|| AppError::not_found(format!("Cafe {} not found", payload.id)))?;
        row.name = payload.name;
        row.description = payload.description;
        row.logo = payload.logo;
        row.location = payload.location;
        let row = row.clone();
        Ok(data.cafe_view(&row))
    }

    /// Delete a café together with its employees
    pub fn delete_cafe(&self, id: &str) -> AppResult<()> {
        let mut data = self.data.write();
        let before = data.cafes.len();
        data.cafes.retain(|c| c.id != id);
        if data.cafes.len() == before {
            return Err(AppError::not_found(format!("Cafe {id} not found")));
        }
        let staff = data.employees.len();
        data.employees.retain(|e| e.cafe_id.as_deref() != Some(id));
        tracing::info!(id, removed_employees = staff - data.employees.len(), "cafe deleted");
        Ok(())
    }

    // ========== Employees ==========

    /// Employees, optionally by exact café name, longest-serving first
    pub fn list_employees(&self, cafe_name: Option<&str>) -> Vec<Employee> {
        let data = self.data.read();
        let mut rows: Vec<&EmployeeRow> = data
            .employees
            .iter()
            .filter(|e| {
                cafe_name.is_none_or(|name| {
                    e.cafe_id
                        .as_deref()
                        .and_then(|id| data.cafe(id))
                        .is_some_and(|c| c.name == name)
                })
            })
            .collect();
        rows.sort_by_key(|e| e.start_date);
        rows.into_iter().map(|e| data.employee_view(e)).collect()
    }

    pub fn get_employee(&self, id: &str) -> AppResult<Employee> {
        let data = self.data.read();
        data.employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| data.employee_view(e))
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
    }

    pub fn create_employee(&self, payload: EmployeeCreate) -> AppResult<Employee> {
        if !is_employee_id(&payload.id) {
            return Err(AppError::validation("ID must be in format UIXXXXXXX"));
        }
        validate_employee(&payload.name, &payload.email_address, &payload.phone_number)?;

        let mut data = self.data.write();
        if data.employees.iter().any(|e| e.id == payload.id) {
            return Err(AppError::conflict(format!(
                "Employee {} already exists",
                payload.id
            )));
        }
        data.check_cafe_ref(payload.cafe_id.as_deref())?;

        let row = EmployeeRow {
            id: payload.id,
            name: payload.name,
            email_address: payload.email_address,
            phone_number: payload.phone_number,
            gender: payload.gender,
            start_date: payload.start_date,
            cafe_id: payload.cafe_id,
        };
        let employee = data.employee_view(&row);
        data.employees.push(row);
        tracing::info!(id = %employee.id, "employee created");
        Ok(employee)
    }

    pub fn update_employee(&self, id: &str, payload: EmployeeUpdate) -> AppResult<Employee> {
        if payload.id != id {
            return Err(AppError::validation("Employee id cannot be changed"));
        }
        validate_employee(&payload.name, &payload.email_address, &payload.phone_number)?;

        let mut data = self.data.write();
        data.check_cafe_ref(payload.cafe_id.as_deref())?;
        let row = data
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
        row.name = payload.name;
        row.email_address = payload.email_address;
        row.phone_number = payload.phone_number;
        row.gender = payload.gender;
        row.start_date = payload.start_date;
        row.cafe_id = payload.cafe_id;
        let row = row.clone();
        Ok(data.employee_view(&row))
    }

    pub fn delete_employee(&self, id: &str) -> AppResult<()> {
        let mut data = self.data.write();
        let before = data.employees.len();
        data.employees.retain(|e| e.id != id);
        if data.employees.len() == before {
            return Err(AppError::not_found(format!("Employee {id} not found")));
        }
        Ok(())
    }
}

fn validate_cafe(name: &str, description: Option<&str>, location: &str) -> AppResult<()> {
    let len = name.trim().chars().count();
    if !(CAFE_NAME_MIN_LEN..=CAFE_NAME_MAX_LEN).contains(&len) {
        return Err(AppError::validation("Name must be 6-10 characters"));
    }
    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN) {
        return Err(AppError::validation("Description must be at most 256 characters"));
    }
    if location.trim().is_empty() {
        return Err(AppError::validation("Location is required"));
    }
    Ok(())
}

fn validate_employee(name: &str, email: &str, phone: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if !is_email_address(email) {
        return Err(AppError::validation("Invalid email"));
    }
    if !is_phone_number(phone) {
        return Err(AppError::validation("Invalid phone number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe(name: &str, location: &str) -> CafeCreate {
        CafeCreate {
            name: name.into(),
            description: None,
            logo: None,
            location: location.into(),
        }
    }

    fn employee(id: &str, start: &str, cafe_id: Option<String>) -> EmployeeCreate {
        EmployeeCreate {
            id: id.into(),
            name: "Someone".into(),
            email_address: "someone@example.com".into(),
            phone_number: "87654321".into(),
            gender: Gender::Male,
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            cafe_id,
        }
    }

    #[test]
    fn test_cafe_delete_cascades() {
        let store = Store::new();
        let abc = store.create_cafe(cafe("Cafe ABC", "Orchard")).unwrap();
        let xyz = store.create_cafe(cafe("Cafe XYZ", "Tampines")).unwrap();
        store
            .create_employee(employee("UIAB123", "2024-01-01", Some(abc.id.clone())))
            .unwrap();
        store
            .create_employee(employee("UICD456", "2024-01-01", Some(xyz.id.clone())))
            .unwrap();

        store.delete_cafe(&abc.id).unwrap();
        let remaining = store.list_employees(None);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "UICD456");
        assert!(matches!(store.delete_cafe(&abc.id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_cafes_sorted_by_employee_count() {
        let store = Store::new();
        let quiet = store.create_cafe(cafe("Quiet Cup", "Orchard")).unwrap();
        let busy = store.create_cafe(cafe("Busy Bean", "Orchard")).unwrap();
        store
            .create_employee(employee("UIAB123", "2024-01-01", Some(busy.id.clone())))
            .unwrap();

        let cafes = store.list_cafes(None);
        assert_eq!(cafes[0].id, busy.id);
        assert_eq!(cafes[0].employees, 1);
        assert_eq!(cafes[1].id, quiet.id);
    }

    #[test]
    fn test_employee_filter_and_order() {
        let store = Store::new();
        let abc = store.create_cafe(cafe("Cafe ABC", "Orchard")).unwrap();
        store
            .create_employee(employee("UIAB123", "2024-05-01", Some(abc.id.clone())))
            .unwrap();
        store
            .create_employee(employee("UICD456", "2023-05-01", Some(abc.id.clone())))
            .unwrap();
        store
            .create_employee(employee("UIEF789", "2022-05-01", None))
            .unwrap();

        let at_abc = store.list_employees(Some("Cafe ABC"));
        let ids: Vec<_> = at_abc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["UICD456", "UIAB123"]);
        assert_eq!(at_abc[0].cafe_name.as_deref(), Some("Cafe ABC"));
        assert_eq!(store.list_employees(None).len(), 3);
    }

    #[test]
    fn test_employee_rules() {
        let store = Store::new();
        store
            .create_employee(employee("UIAB123", "2024-01-01", None))
            .unwrap();
        assert!(matches!(
            store.create_employee(employee("UIAB123", "2024-01-01", None)),
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            store.create_employee(employee("UI12", "2024-01-01", None)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.create_employee(employee("UIXY999", "2024-01-01", Some("nope".into()))),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_cafe_name_is_rejected() {
        let store = Store::new();
        assert!(matches!(
            store.create_cafe(cafe("      ", "Orchard")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.create_cafe(cafe("Cafe ABC", "   ")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_seeded_store() {
        let store = Store::seeded();
        assert_eq!(store.list_cafes(None).len(), 3);
        assert_eq!(store.list_cafes(Some("Orchard")).len(), 2);
        assert_eq!(store.list_employees(None).len(), 4);
    }
}
