use chrono::NaiveDate;
use validator::Validate;

use super::{RecordForm, non_empty};
use crate::models::{Employee, EmployeeCreate, EmployeeUpdate, Gender};
use crate::validation::{EMAIL_ADDRESS, EMPLOYEE_ID, FieldErrors, PHONE_NUMBER};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Employee add/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct EmployeeForm {
    #[validate(
        length(min = 1, message = "ID is required"),
        regex(path = *EMPLOYEE_ID, message = "ID must be in format UIXXXXXXX")
    )]
    pub id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        regex(path = *EMAIL_ADDRESS, message = "Invalid email")
    )]
    pub email_address: String,
    #[validate(
        length(min = 1, message = "Phone is required"),
        regex(path = *PHONE_NUMBER, message = "Invalid phone number")
    )]
    pub phone_number: String,
    /// `Male` or `Female`
    pub gender: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// Empty for "not assigned"
    pub cafe_id: String,
}

impl EmployeeForm {
    /// Payload for `POST /employees`; the id must match the id pattern
    pub fn to_create(&self) -> Result<EmployeeCreate, FieldErrors> {
        let (form, gender, start_date) = self.resolve(false)?;
        Ok(EmployeeCreate {
            id: form.id,
            name: form.name,
            email_address: form.email_address,
            phone_number: form.phone_number,
            gender,
            start_date,
            cafe_id: non_empty(&form.cafe_id),
        })
    }

    /// Payload for `PUT /employees/{id}`.
    ///
    /// The id is read-only while editing, so whatever the id field holds is
    /// ignored and `id` is sent instead.
    pub fn to_update(&self, id: &str) -> Result<EmployeeUpdate, FieldErrors> {
        let (form, gender, start_date) = self.resolve(true)?;
        Ok(EmployeeUpdate {
            id: id.to_string(),
            name: form.name,
            email_address: form.email_address,
            phone_number: form.phone_number,
            gender,
            start_date,
            cafe_id: non_empty(&form.cafe_id),
        })
    }

    fn trimmed(&self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            email_address: self.email_address.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            gender: self.gender.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            cafe_id: self.cafe_id.trim().to_string(),
        }
    }

    /// Run every rule on the trimmed values and parse the typed fields
    fn resolve(&self, skip_id: bool) -> Result<(Self, Gender, NaiveDate), FieldErrors> {
        let form = self.trimmed();
        let mut errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };
        if skip_id {
            errors.remove("id");
        }

        let gender = form.gender.parse::<Gender>().ok();
        if gender.is_none() {
            errors.insert("gender", "Gender is required");
        }

        let start_date = if form.start_date.is_empty() {
            errors.insert("start_date", "Start Date is required");
            None
        } else {
            let parsed = NaiveDate::parse_from_str(&form.start_date, DATE_FORMAT).ok();
            if parsed.is_none() {
                errors.insert("start_date", "Invalid start date");
            }
            parsed
        };

        match (gender, start_date) {
            (Some(gender), Some(start_date)) if errors.is_empty() => {
                Ok((form, gender, start_date))
            }
            _ => Err(errors),
        }
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            email_address: employee.email_address.clone(),
            phone_number: employee.phone_number.clone(),
            gender: employee.gender.to_string(),
            start_date: employee
                .start_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            cafe_id: employee.cafe_id.clone().unwrap_or_default(),
        }
    }
}

impl RecordForm for EmployeeForm {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "email_address",
        "phone_number",
        "gender",
        "start_date",
        "cafe_id",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "email_address" => Some(&self.email_address),
            "phone_number" => Some(&self.phone_number),
            "gender" => Some(&self.gender),
            "start_date" => Some(&self.start_date),
            "cafe_id" => Some(&self.cafe_id),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "id" => &mut self.id,
            "name" => &mut self.name,
            "email_address" => &mut self.email_address,
            "phone_number" => &mut self.phone_number,
            "gender" => &mut self.gender,
            "start_date" => &mut self.start_date,
            "cafe_id" => &mut self.cafe_id,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn check(&self) -> Result<(), FieldErrors> {
        self.resolve(false).map(|_| ())
    }
}
