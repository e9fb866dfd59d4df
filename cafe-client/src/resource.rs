//! Resource definitions and the typed REST client
//!
//! A [`Resource`] names one record type and how the backend exposes it;
//! [`ResourceClient`] issues list/get/create/update/delete for it.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::form::RecordForm;
use shared::{
    Cafe, CafeCreate, CafeForm, CafeUpdate, Employee, EmployeeCreate, EmployeeForm,
    EmployeeUpdate, FieldErrors,
};
use urlencoding::encode;

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientResult};

/// One REST resource: its record, payload and form types plus its routes
pub trait Resource: Send + Sync + 'static {
    type Record: Clone + std::fmt::Debug + DeserializeOwned + Send + Sync + 'static;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
    type Form: RecordForm + for<'a> From<&'a Self::Record>;

    /// Singular name used in logs
    const NAME: &'static str;
    /// Collection path (`cafes`)
    const COLLECTION: &'static str;
    /// Query parameter carrying the list filter
    const FILTER_PARAM: &'static str;
    /// Confirmation shown before a delete
    const DELETE_PROMPT: &'static str;
    /// Form fields that cannot change once the record exists
    const READ_ONLY_WHEN_EDITING: &'static [&'static str] = &[];

    fn id(record: &Self::Record) -> &str;

    /// Path for updating `id`
    fn update_path(id: &str) -> String;

    fn create_payload(form: &Self::Form) -> Result<Self::Create, FieldErrors>;

    fn update_payload(form: &Self::Form, id: &str) -> Result<Self::Update, FieldErrors>;

    /// Filter options derived from an unfiltered list, if this resource
    /// derives its own
    fn filter_options(_rows: &[Self::Record]) -> Option<Vec<String>> {
        None
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION, encode(id))
    }
}

/// Cafés, filtered by location
#[derive(Debug, Clone, Copy, Default)]
pub struct Cafes;

impl Resource for Cafes {
    type Record = Cafe;
    type Create = CafeCreate;
    type Update = CafeUpdate;
    type Form = CafeForm;

    const NAME: &'static str = "cafe";
    const COLLECTION: &'static str = "cafes";
    const FILTER_PARAM: &'static str = "location";
    const DELETE_PROMPT: &'static str = "Delete this café and all employees?";

    fn id(record: &Cafe) -> &str {
        &record.id
    }

    /// `PUT /cafes` carries the id in the body
    fn update_path(_id: &str) -> String {
        Self::COLLECTION.to_string()
    }

    fn create_payload(form: &CafeForm) -> Result<CafeCreate, FieldErrors> {
        form.to_create()
    }

    fn update_payload(form: &CafeForm, id: &str) -> Result<CafeUpdate, FieldErrors> {
        form.to_update(id)
    }

    fn filter_options(rows: &[Cafe]) -> Option<Vec<String>> {
        Some(rows.iter().map(|c| c.location.clone()).collect())
    }
}

/// Employees, filtered by café name
#[derive(Debug, Clone, Copy, Default)]
pub struct Employees;

impl Resource for Employees {
    type Record = Employee;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;
    type Form = EmployeeForm;

    const NAME: &'static str = "employee";
    const COLLECTION: &'static str = "employees";
    const FILTER_PARAM: &'static str = "cafe";
    const DELETE_PROMPT: &'static str = "Delete this employee?";
    const READ_ONLY_WHEN_EDITING: &'static [&'static str] = &["id"];

    fn id(record: &Employee) -> &str {
        &record.id
    }

    fn update_path(id: &str) -> String {
        Self::item_path(id)
    }

    fn create_payload(form: &EmployeeForm) -> Result<EmployeeCreate, FieldErrors> {
        form.to_create()
    }

    fn update_payload(form: &EmployeeForm, id: &str) -> Result<EmployeeUpdate, FieldErrors> {
        form.to_update(id)
    }
}

/// Typed REST client for one resource
#[derive(Debug)]
pub struct ResourceClient<R: Resource, H: HttpClient> {
    http: H,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, H: HttpClient + Clone> Clone for ResourceClient<R, H> {
    fn clone(&self) -> Self {
        Self::new(self.http.clone())
    }
}

impl<R: Resource> ResourceClient<R, NetworkHttpClient> {
    /// Build a network-backed client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }
}

impl<R: Resource, H: HttpClient> ResourceClient<R, H> {
    pub fn new(http: H) -> Self {
        Self {
            http,
            _resource: PhantomData,
        }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// `GET /{collection}[?{param}={filter}]`, exact-match filter
    pub async fn list(&self, filter: Option<&str>) -> ClientResult<Vec<R::Record>> {
        let rows: Vec<R::Record> = match filter {
            Some(value) => {
                self.http
                    .get(R::COLLECTION, &[(R::FILTER_PARAM, value)])
                    .await?
            }
            None => self.http.get(R::COLLECTION, &[]).await?,
        };
        tracing::debug!(resource = R::NAME, ?filter, count = rows.len(), "listed");
        Ok(rows)
    }

    /// `GET /{collection}/{id}`
    pub async fn get(&self, id: &str) -> ClientResult<R::Record> {
        self.http.get(&R::item_path(id), &[]).await
    }

    /// `POST /{collection}`
    pub async fn create(&self, payload: &R::Create) -> ClientResult<R::Record> {
        let record: R::Record = self.http.post(R::COLLECTION, payload).await?;
        tracing::info!(resource = R::NAME, id = R::id(&record), "created");
        Ok(record)
    }

    /// `PUT` to the resource's update path
    pub async fn update(&self, id: &str, payload: &R::Update) -> ClientResult<R::Record> {
        let record: R::Record = self.http.put(&R::update_path(id), payload).await?;
        tracing::info!(resource = R::NAME, id, "updated");
        Ok(record)
    }

    /// `DELETE /{collection}/{id}`
    pub async fn remove(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&R::item_path(id)).await?;
        tracing::info!(resource = R::NAME, id, "deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Cafes::update_path("c-1"), "cafes");
        assert_eq!(Cafes::item_path("c-1"), "cafes/c-1");
        assert_eq!(Employees::update_path("UIAB123"), "employees/UIAB123");
        assert_eq!(Employees::item_path("a b"), "employees/a%20b");
    }

    #[test]
    fn test_cafe_options_come_from_locations() {
        let cafe = |location: &str| Cafe {
            id: location.to_lowercase(),
            name: "Cafe ABC".into(),
            description: None,
            logo: None,
            location: location.into(),
            employees: 0,
        };
        let options = Cafes::filter_options(&[cafe("Orchard"), cafe("Tampines")]);
        assert_eq!(options, Some(vec!["Orchard".to_string(), "Tampines".to_string()]));
        assert_eq!(Employees::filter_options(&[]), None);
    }
}
