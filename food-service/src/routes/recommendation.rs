use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use campus_shared::Food;

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/recommendations", get(recommendations))
}

/// GET /recommendations - Up to five foods like the ones the caller ordered
async fn recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Food>>, ApiError> {
    let foods = RecommendationService::for_user(state.db(), auth.user_id).await?;
    Ok(Json(foods))
}
