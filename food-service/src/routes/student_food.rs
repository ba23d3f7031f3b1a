use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::StudentFoodService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use campus_shared::{AssignStudentFoodRequest, StudentFood};

pub fn student_food_routes() -> Router<AppState> {
    Router::new().route("/studentsfood", get(list_student_food).post(assign_food))
}

/// GET /studentsfood - Every student with their assigned meal
async fn list_student_food(State(state): State<AppState>) -> Result<Json<Vec<StudentFood>>, ApiError> {
    Ok(Json(StudentFoodService::list(state.db()).await?))
}

/// POST /studentsfood - body `{ studentId, food, firstName?, lastName? }`
async fn assign_food(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<AssignStudentFoodRequest>,
) -> Result<Json<StudentFood>, ApiError> {
    Ok(Json(StudentFoodService::assign(state.db(), req).await?))
}
