pub mod handlers;
pub mod types;

use crate::{Result, config::Config, listing::ListingExtractor};
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let extractor = ListingExtractor::from_config(config.llm.clone())?;

    let app_state = AppState {
        extractor: Arc::new(extractor),
    };

    let app = router(app_state, &config.server.path);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {} (endpoint {})", addr, config.server.path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Listing endpoint at `path` plus `/health`. Preflight `OPTIONS` requests
/// are answered by the CORS layer before routing.
pub fn router(state: AppState, path: &str) -> Router {
    Router::new()
        .route(
            path,
            post(handlers::analyze_photos).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
