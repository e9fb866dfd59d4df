//! Employee API Handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::error::AppResult;
use crate::state::Store;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Café name, not id
    #[serde(default, deserialize_with = "crate::api::empty_as_none")]
    cafe: Option<String>,
}

/// GET /employees - 按工作天数排序
pub async fn list(
    State(store): State<Arc<Store>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Employee>> {
    Json(store.list_employees(query.cafe.as_deref()))
}

/// GET /employees/:id
pub async fn get_by_id(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    Ok(Json(store.get_employee(&id)?))
}

/// POST /employees
pub async fn create(
    State(store): State<Arc<Store>>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    Ok(Json(store.create_employee(payload)?))
}

/// PUT /employees/:id
pub async fn update(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    Ok(Json(store.update_employee(&id, payload)?))
}

/// DELETE /employees/:id
pub async fn delete(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    store.delete_employee(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
