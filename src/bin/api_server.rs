// src/bin/api_server.rs

use message_bottle::infra::{config::Config, logging};
use message_bottle::transport;
use message_bottle::{BottleService, MemoryContentStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let config = Config::from_env()?;

    // --- Service Initialization ---
    info!(gateway = %config.gateway_url, ttl_secs = config.bottle_ttl.num_seconds(), "initializing bottle service");
    let store = MemoryContentStore::new(config.gateway_url.clone());
    let service = Arc::new(BottleService::new(store, config.bottle_ttl));
    let app_state = transport::http::AppState { service };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(config.api_addr).await?;
    info!(addr = %config.api_addr, "API server listening (Swagger UI at /swagger-ui)");

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!(error = %e, "server stopped");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
