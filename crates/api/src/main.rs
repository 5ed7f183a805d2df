//! Driv'n Cook compliance API server binary entrypoint.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use drivn_backend::HttpBackend;
use drivn_common::config::AppConfig;

use drivn_api::routes::create_router;
use drivn_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("drivn_api=debug,drivn_engine=debug,drivn_backend=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting Driv'n Cook compliance API...");

    let config = AppConfig::from_env()?;

    let backend = HttpBackend::new(config.backend.clone())?;
    tracing::info!(
        backend_url = %config.backend.base_url,
        timeout_ms = config.backend.timeout_ms,
        "Backend client ready"
    );

    let state = AppState::new(Arc::new(backend));

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.api_host, config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
