//! Cafe Client - grid and form state for the café admin
//!
//! Provides typed REST access to the café and employee resources and the
//! client-side state that sits on top of it: filters, grids, edit sessions
//! and cross-navigation between the two views.

pub mod config;
pub mod error;
pub mod filter;
pub mod grid;
pub mod http;
pub mod navigation;
pub mod resource;
pub mod session;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use filter::FilterState;
pub use grid::{FetchOutcome, FetchTicket, GridController, GridState, PAGE_SIZE, PendingFetch, days_worked};
pub use http::{HttpClient, NetworkHttpClient};
pub use navigation::{EmployeesRoute, employees_for_cafe};
pub use resource::{Cafes, Employees, Resource, ResourceClient};
pub use session::{EditSession, SubmitRequest};
pub use view::{CafesView, EmployeesView};

// Re-export shared types for convenience
pub use shared::{
    Cafe, CafeCreate, CafeForm, CafeUpdate, Employee, EmployeeCreate, EmployeeForm,
    EmployeeUpdate, FieldErrors, Gender, RecordForm,
};
