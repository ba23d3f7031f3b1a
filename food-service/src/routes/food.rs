//! Food catalogue routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::routes::path_id;
use crate::services::FoodService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use campus_shared::{CreateFoodRequest, Food, FoodsQuery, UpdateFoodRequest};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/food", get(list_foods).post(create_food))
        .route("/food/:id", get(get_food).put(update_food).delete(delete_food))
}

/// GET /food - All foods, optionally `?cookId=`
async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<FoodsQuery>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let foods = FoodService::list(state.db(), query.cook_id).await?;
    Ok(Json(foods))
}

/// POST /food - Add a food owned by the caller
async fn create_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<Food>), ApiError> {
    let food = FoodService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(food)))
}

async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Food>, ApiError> {
    let id = path_id("food", &id)?;
    let food = FoodService::get(state.db(), id).await?;
    Ok(Json(food))
}

async fn update_food(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateFoodRequest>,
) -> Result<Json<Food>, ApiError> {
    let id = path_id("food", &id)?;
    let food = FoodService::update(state.db(), id, req).await?;
    Ok(Json(food))
}

async fn delete_food(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("food", &id)?;
    FoodService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
