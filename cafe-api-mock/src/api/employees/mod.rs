//! Employee API 模块

mod handler;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::state::Store;

pub fn router() -> Router<Arc<Store>> {
    Router::new()
        .route("/employees", get(handler::list).post(handler::create))
        .route(
            "/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
