//! Cafe API 模块

mod handler;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::Store;

pub fn router() -> Router<Arc<Store>> {
    Router::new()
        .route("/cafes", get(handler::list).post(handler::create).put(handler::update))
        .route("/cafes/{id}", delete(handler::delete))
}
