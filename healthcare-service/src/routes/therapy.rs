//! Therapy routes, including the two the food service calls

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
use campus_shared::{CreateTherapyRequest, TherapyData, TherapyStatusUpdate, UpdateTherapyRequest};

pub fn therapy_routes() -> Router<AppState> {
    Router::new()
        .route("/therapies", get(list))
        .route("/therapy", post(create))
        .route("/therapy/:id", get(get_one).put(update).delete(delete))
        .route("/updateTherapy", put(update_from_food))
        .route("/doneTherapies", get(done_therapies))
}

/// POST /therapy - Save, then hand over to the food service
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTherapyRequest>,
) -> Result<(StatusCode, Json<TherapyData>), ApiError> {
    let therapy = TherapyService::create(&state, req).await?;
    Ok((StatusCode::CREATED, Json(therapy)))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<TherapyData>>, ApiError> {
    Ok(Json(TherapyService::list(state.db()).await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TherapyData>, ApiError> {
    let id = path_id("therapy", &id)?;
    Ok(Json(TherapyService::get(state.db(), id).await?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTherapyRequest>,
) -> Result<Json<TherapyData>, ApiError> {
    let id = path_id("therapy", &id)?;
    Ok(Json(TherapyService::update(state.db(), id, req).await?))
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("therapy", &id)?;
    TherapyService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /updateTherapy - `{ "id", "status" }` from the kitchen
async fn update_from_food(
    State(state): State<AppState>,
    Json(update): Json<TherapyStatusUpdate>,
) -> Result<Json<TherapyData>, ApiError> {
    Ok(Json(
        TherapyService::apply_kitchen_update(state.db(), update).await?,
    ))
}

/// GET /doneTherapies - Proxied from the food service
async fn done_therapies(State(state): State<AppState>) -> Result<Json<Vec<TherapyData>>, ApiError> {
    Ok(Json(TherapyService::done_from_food(&state).await?))
}
