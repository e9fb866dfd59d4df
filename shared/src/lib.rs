//! Shared types for the café admin workspace
//!
//! Record models, form schemas and field validation used by the client,
//! the mock backend and the CLI.

pub mod form;
pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use form::{CafeForm, EmployeeForm, RecordForm};
pub use models::{
    Cafe, CafeCreate, CafeUpdate, Employee, EmployeeCreate, EmployeeUpdate, Gender,
};
pub use response::ErrorBody;
pub use serde::{Deserialize, Serialize};
pub use validation::FieldErrors;
