//! Therapy routes, called by the kitchen UI and by the healthcare service

use crate::error::ApiError;
use crate::routes::path_id;
use crate::services::TherapyService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use campus_shared::{SetTherapyStatusRequest, TherapyData, TherapyStatusUpdate};

pub fn therapy_routes() -> Router<AppState> {
    Router::new()
        .route("/therapy", post(receive_therapy).delete(clear_cache))
        .route("/therapy/:id", put(set_status))
        .route("/therapy/:id/approve", put(approve))
        .route("/therapies", get(list_therapies))
        .route("/therapies/done", get(list_done))
        .route("/therapies/cached", get(list_cached))
        .route("/therapies/healthcare", get(pull_from_healthcare))
}

/// POST /therapy - Healthcare pushes a new therapy
async fn receive_therapy(
    State(state): State<AppState>,
    Json(therapy): Json<TherapyData>,
) -> Result<(StatusCode, Json<TherapyData>), ApiError> {
    let saved = TherapyService::receive(&state, therapy).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn list_therapies(State(state): State<AppState>) -> Result<Json<Vec<TherapyData>>, ApiError> {
    Ok(Json(TherapyService::list(&state).await?))
}

/// GET /therapies/done - Consumed by healthcare
async fn list_done(State(state): State<AppState>) -> Result<Json<Vec<TherapyData>>, ApiError> {
    Ok(Json(TherapyService::list_done(&state).await?))
}

async fn list_cached(State(state): State<AppState>) -> Json<Vec<TherapyData>> {
    Json(TherapyService::cached(&state).await)
}

async fn pull_from_healthcare(
    State(state): State<AppState>,
) -> Result<Json<Vec<TherapyData>>, ApiError> {
    Ok(Json(TherapyService::pull_from_healthcare(&state).await?))
}

/// DELETE /therapy - Empty the cache; stored therapies are untouched
async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    TherapyService::clear_cache(&state).await;
    StatusCode::NO_CONTENT
}

async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TherapyStatusUpdate>, ApiError> {
    let id = path_id("therapy", &id)?;
    Ok(Json(TherapyService::approve(&state, id).await?))
}

/// PUT /therapy/:id - body `{ "status": "done" | "undone" }`
async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetTherapyStatusRequest>,
) -> Result<Json<TherapyStatusUpdate>, ApiError> {
    let id = path_id("therapy", &id)?;
    Ok(Json(TherapyService::set_status(&state, id, &req.status).await?))
}
