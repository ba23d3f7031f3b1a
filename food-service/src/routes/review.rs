//! Review routes: ratings, comments and summaries

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::routes::path_id;
use crate::services::ReviewService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use campus_shared::{
    AddCommentRequest, BatchSummaryRequest, Comment, CommentsQuery, ReviewSummary,
    SetRatingRequest,
};
use std::collections::HashMap;
use uuid::Uuid;

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/food/:id/reviews/summary", get(get_summary))
        .route("/food/:id/reviews/rating", post(set_rating))
        .route(
            "/food/:id/reviews/comments",
            get(list_comments).post(add_comment),
        )
        .route("/foods/reviews/summaries", post(batch_summaries))
}

/// GET /food/:id/reviews/summary
///
/// A student token, when present, fills `canReview` and `myRating`.
async fn get_summary(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<ReviewSummary>, ApiError> {
    let food_id = path_id("food", &id)?;
    let summary = ReviewService::summary(state.db(), food_id, auth.as_ref()).await?;
    Ok(Json(summary))
}

/// POST /food/:id/reviews/rating
async fn set_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<SetRatingRequest>,
) -> Result<Json<ReviewSummary>, ApiError> {
    let food_id = path_id("food", &id)?;
    let summary = ReviewService::set_rating(state.db(), food_id, &auth, req.rating).await?;
    Ok(Json(summary))
}

/// GET /food/:id/reviews/comments?limit=N
async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CommentsQuery>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let food_id = path_id("food", &id)?;
    let comments = ReviewService::list_comments(state.db(), food_id, query.limit).await?;
    Ok(Json(comments))
}

/// POST /food/:id/reviews/comments
async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let food_id = path_id("food", &id)?;
    let comment = ReviewService::add_comment(state.db(), food_id, &auth, &req.text).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// POST /foods/reviews/summaries - Map keyed by food id
async fn batch_summaries(
    State(state): State<AppState>,
    Json(req): Json<BatchSummaryRequest>,
) -> Result<Json<HashMap<Uuid, ReviewSummary>>, ApiError> {
    let summaries = ReviewService::batch_summaries(state.db(), &req.food_ids).await?;
    Ok(Json(summaries))
}
