//! Cafe API Handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::{Cafe, CafeCreate, CafeUpdate};

use crate::error::AppResult;
use crate::state::Store;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "crate::api::empty_as_none")]
    location: Option<String>,
}

/// GET /cafes - 按员工数排序的咖啡店
pub async fn list(
    State(store): State<Arc<Store>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Cafe>> {
    Json(store.list_cafes(query.location.as_deref()))
}

/// POST /cafes
pub async fn create(
    State(store): State<Arc<Store>>,
    Json(payload): Json<CafeCreate>,
) -> AppResult<Json<Cafe>> {
    Ok(Json(store.create_cafe(payload)?))
}

/// PUT /cafes - id 在请求体中
pub async fn update(
    State(store): State<Arc<Store>>,
    Json(payload): Json<CafeUpdate>,
) -> AppResult<Json<Cafe>> {
    Ok(Json(store.update_cafe(payload)?))
}

/// DELETE /cafes/:id - 同时删除该店员工
pub async fn delete(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    store.delete_cafe(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
