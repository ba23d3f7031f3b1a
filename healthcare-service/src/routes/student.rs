//! Student and health record routes

use crate::error::ApiError;
use crate::routes::path_id;
use crate::services::{HealthRecordService, StudentService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use campus_shared::{
    CreateStudentRequest, HealthRecord, Student, UpdateHealthRecordRequest, UpdateStudentRequest,
};

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/student/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/healthrecords", get(list_records))
        .route("/healthrecords/:id", get(get_record).put(update_record))
}

/// POST /students - Also opens the student's first health record
async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = StudentService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(StudentService::list(state.db()).await?))
}

async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let id = path_id("student", &id)?;
    Ok(Json(StudentService::get(state.db(), id).await?))
}

async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<Student>, ApiError> {
    let id = path_id("student", &id)?;
    Ok(Json(StudentService::update(state.db(), id, req).await?))
}

async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("student", &id)?;
    StudentService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<HealthRecord>>, ApiError> {
    Ok(Json(HealthRecordService::list(state.db()).await?))
}

async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HealthRecord>, ApiError> {
    let id = path_id("health record", &id)?;
    Ok(Json(HealthRecordService::get(state.db(), id).await?))
}

async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateHealthRecordRequest>,
) -> Result<Json<HealthRecord>, ApiError> {
    let id = path_id("health record", &id)?;
    Ok(Json(HealthRecordService::update(state.db(), id, req).await?))
}
