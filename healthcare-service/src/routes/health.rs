//! Health check endpoints

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

fn response(status: &'static str, database: Option<String>) -> HealthResponse {
    HealthResponse {
        service: "healthcare-service",
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(response("healthy", None))
}

pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match db::health_check(state.db()).await {
        Ok(()) => Ok(Json(response("ready", Some("healthy".to_string())))),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(response("not_ready", Some(e.to_string()))),
        )),
    }
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(response("alive", None))
}
