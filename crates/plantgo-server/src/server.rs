//! Router assembly and server startup.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use plantgo_catalog::RiddleCatalog;
use plantgo_scanner::Classifier;

use crate::config::ServerConfig;
use crate::{routes, ws};

/// Shared application state passed to Axum handlers.
///
/// Everything in here is immutable or internally synchronized; sessions
/// share no mutable state with each other.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RiddleCatalog>,
    pub classifier: Arc<Classifier>,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState, static_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/health", get(routes::health))
        .route("/riddles", get(routes::list_riddles))
        .route("/riddles/active", get(routes::active_riddles))
        .route("/riddles/level/{level}", get(routes::riddle_by_level))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Create and start the server. Returns a handle that keeps it alive.
pub async fn start(config: ServerConfig) -> Result<ServerHandle, std::io::Error> {
    let state = AppState {
        catalog: Arc::new(RiddleCatalog::builtin()),
        classifier: Arc::new(Classifier::new(config.inference_delay)),
    };

    let router = build_router(state, &config.static_dir);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "PlantGo server started");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        _server: server_handle,
    })
}

/// Handle returned by [`start`] — dropping it does not stop the server,
/// but the serve task is tied to its join handle.
pub struct ServerHandle {
    pub port: u16,
    _server: tokio::task::JoinHandle<()>,
}
