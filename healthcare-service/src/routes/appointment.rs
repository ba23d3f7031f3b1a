//! Appointment routes

use crate::error::ApiError;
use crate::routes::path_id;
use crate::services::AppointmentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use campus_shared::{
    Appointment, CreateAppointmentRequest, ScheduleAppointmentRequest, UpdateAppointmentRequest,
};

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list).post(create))
        .route("/appointments/reserved", get(list_reserved))
        .route("/appointments/available", get(list_available))
        .route("/appointments/student/:student_id", get(list_for_student))
        .route(
            "/appointments/:id",
            get(get_one).patch(update).delete(delete),
        )
        .route("/appointments/:id/schedule", post(schedule))
        .route("/appointments/:id/cancel", post(cancel))
}

/// POST /appointments - Systematic ones are reported to the university
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let appointment = AppointmentService::create(&state, req).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(AppointmentService::list(state.db()).await?))
}

async fn list_reserved(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(AppointmentService::list_reserved(state.db()).await?))
}

/// GET /appointments/available - Unreserved and not in the past
async fn list_available(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(AppointmentService::list_available(state.db()).await?))
}

async fn list_for_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let student_id = path_id("student", &student_id)?;
    Ok(Json(
        AppointmentService::list_for_student(state.db(), student_id).await?,
    ))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    let id = path_id("appointment", &id)?;
    Ok(Json(AppointmentService::get(state.db(), id).await?))
}

/// PATCH /appointments/:id - Absent fields are left as they are
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let id = path_id("appointment", &id)?;
    Ok(Json(AppointmentService::update(state.db(), id, req).await?))
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("appointment", &id)?;
    AppointmentService::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ScheduleAppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let id = path_id("appointment", &id)?;
    Ok(Json(
        AppointmentService::schedule(state.db(), id, req.student_id).await?,
    ))
}

async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    let id = path_id("appointment", &id)?;
    Ok(Json(AppointmentService::cancel(state.db(), id).await?))
}
