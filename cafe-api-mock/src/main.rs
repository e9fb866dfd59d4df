use std::sync::Arc;

use cafe_api_mock::{DEFAULT_PORT, Store};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_api_mock=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let port = std::env::var("MOCK_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("cafe-api-mock listening on {}", listener.local_addr()?);

    let store = Arc::new(Store::seeded());
    tokio::select! {
        result = cafe_api_mock::serve(listener, store) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutting down"),
    }
    Ok(())
}
