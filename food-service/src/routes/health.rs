//! Health check endpoints
//!
//! `/health/ready` is the only check that touches the database.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

const SERVICE_NAME: &str = "food-service";

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ReadinessChecks>,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub database: CheckStatus,
    /// Therapies currently held in memory
    pub cached_therapies: usize,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthResponse {
    fn plain(status: &'static str) -> Self {
        Self {
            service: SERVICE_NAME,
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: None,
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::plain("healthy"))
}

/// Readiness check; 503 while the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match db::health_check(state.db()).await {
        Ok(()) => CheckStatus {
            status: "healthy",
            message: None,
        },
        Err(e) => CheckStatus {
            status: "unhealthy",
            message: Some(e.to_string()),
        },
    };
    let ready = database.status == "healthy";

    let mut response = HealthResponse::plain(if ready { "ready" } else { "not_ready" });
    response.checks = Some(ReadinessChecks {
        database,
        cached_therapies: state.therapies.len().await,
    });

    if ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::plain("alive"))
}
