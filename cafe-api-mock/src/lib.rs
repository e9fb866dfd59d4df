//! In-memory café/employee backend
//!
//! Serves the same REST contract as the production API so the client and
//! the admin CLI can be developed and tested without one.

pub mod api;
pub mod error;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::{AppError, AppResult};
pub use state::Store;

/// Port used by the binary when `MOCK_PORT` is unset
pub const DEFAULT_PORT: u16 = 5050;

pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .merge(api::cafes::router())
        .merge(api::employees::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Serve on an already bound listener until the future is dropped
pub async fn serve(listener: TcpListener, store: Arc<Store>) -> std::io::Result<()> {
    axum::serve(listener, router(store)).await
}

/// Bind an ephemeral local port and serve in the background
pub async fn spawn(store: Arc<Store>) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener, store).await {
            tracing::error!("Mock server error: {}", e);
        }
    });
    Ok((addr, handle))
}
