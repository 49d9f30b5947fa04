//! HTTP handlers for the health check and the riddle catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use plantgo_core::Riddle;

use crate::server::AppState;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "PlantGo Scanner Backend";

/// Health check response body.
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Errors surfaced to HTTP clients as structured `{"error": ...}` bodies.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid level index")]
    InvalidLevel,
    #[error("Riddle not found for this level")]
    RiddleNotFound,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidLevel => StatusCode::BAD_REQUEST,
            Self::RiddleNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// GET /riddles
pub async fn list_riddles(State(state): State<AppState>) -> Json<Vec<Riddle>> {
    Json(state.catalog.all().to_vec())
}

/// GET /riddles/active
pub async fn active_riddles(State(state): State<AppState>) -> Json<Vec<Riddle>> {
    Json(state.catalog.active())
}

/// GET /riddles/level/{level}
///
/// The segment is parsed by hand so a non-integer yields the structured
/// 400 body rather than a bare rejection.
pub async fn riddle_by_level(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> Result<Json<Riddle>, ApiError> {
    let level: i32 = level.parse().map_err(|_| ApiError::InvalidLevel)?;
    state
        .catalog
        .by_level(level)
        .cloned()
        .map(Json)
        .ok_or(ApiError::RiddleNotFound)
}
