//! Review aggregation service
//!
//! Ratings and comments are only accepted from students who have ordered
//! the food at least once. Input is validated before any database access.
//!
//! Summaries are computed on every read:
//! - `avgRating` / `ratingCount` from the ratings table (zeros when none)
//! - `commentCount` from the comments table
//! - `canReview` / `myRating` only when a student token is presented

use crate::auth::AuthUser;
use crate::db::{with_timeout, DEFAULT_TIMEOUT};
use crate::error::ApiError;
use crate::repositories::{
    FoodCommentCount, FoodRatingAggregate, NewComment, OrderRepository, ReviewRepository,
};
use campus_shared::validation::{clamp_comment_limit, normalize_comment, validate_rating};
use campus_shared::{Comment, ReviewSummary};
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};
use uuid::Uuid;

/// Build one summary per requested id from grouped aggregation rows.
/// Ids with no rows get a zeroed summary.
pub fn merge_summaries(
    food_ids: &[Uuid],
    ratings: &[FoodRatingAggregate],
    comments: &[FoodCommentCount],
) -> HashMap<Uuid, ReviewSummary> {
    let mut out: HashMap<Uuid, ReviewSummary> = food_ids
        .iter()
        .map(|id| (*id, ReviewSummary::empty(*id)))
        .collect();

    for row in ratings {
        if let Some(summary) = out.get_mut(&row.food_id) {
            summary.avg_rating = row.avg_rating;
            summary.rating_count = row.rating_count;
        }
    }
    for row in comments {
        if let Some(summary) = out.get_mut(&row.food_id) {
            summary.comment_count = row.comment_count;
        }
    }

    out
}

/// Parse batch ids, silently dropping the ones that are not valid ids
pub fn parse_batch_ids(raw: &[String]) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    raw.iter()
        .filter_map(|s| Uuid::parse_str(s.trim()).ok())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Review service for business logic
pub struct ReviewService;

impl ReviewService {
    /// Summary of one food. With a student viewer the eligibility flag and
    /// the viewer's own rating are filled in; failures there are logged and
    /// leave the defaults.
    pub async fn summary(
        pool: &PgPool,
        food_id: Uuid,
        viewer: Option<&AuthUser>,
    ) -> Result<ReviewSummary, ApiError> {
        let mut summary = Self::base_summary(pool, food_id).await?;

        if let Some(user) = viewer.filter(|u| u.is_student()) {
            match Self::has_ordered(pool, user.user_id, food_id).await {
                Ok(can) => summary.can_review = can,
                Err(e) => warn!(food_id = %food_id, error = %e, "Eligibility check failed"),
            }
            match with_timeout(
                DEFAULT_TIMEOUT,
                ReviewRepository::get_my_rating(pool, food_id, user.user_id),
            )
            .await
            {
                Ok(Some(rating)) => summary.my_rating = rating,
                Ok(None) => {}
                Err(e) => warn!(food_id = %food_id, error = %e, "Reading own rating failed"),
            }
        }

        Ok(summary)
    }

    /// Rate a food (insert or replace the caller's rating)
    pub async fn set_rating(
        pool: &PgPool,
        food_id: Uuid,
        user: &AuthUser,
        rating: i32,
    ) -> Result<ReviewSummary, ApiError> {
        user.require_student()?;
        validate_rating(rating)?;
        Self::ensure_eligible(pool, user.user_id, food_id).await?;

        with_timeout(
            DEFAULT_TIMEOUT,
            ReviewRepository::upsert_rating(pool, food_id, user.user_id, rating),
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(food_id = %food_id, user_id = %user.user_id, rating, "Rating saved");

        let mut summary = Self::base_summary(pool, food_id).await?;
        summary.can_review = true;
        summary.my_rating = rating;
        Ok(summary)
    }

    /// Add a comment authored by the caller
    pub async fn add_comment(
        pool: &PgPool,
        food_id: Uuid,
        user: &AuthUser,
        text: &str,
    ) -> Result<Comment, ApiError> {
        user.require_student()?;
        let text = normalize_comment(text)?;
        Self::ensure_eligible(pool, user.user_id, food_id).await?;

        let input = NewComment {
            food_id,
            user_id: user.user_id,
            author: user.display_name(),
            text,
        };
        let record = with_timeout(DEFAULT_TIMEOUT, ReviewRepository::add_comment(pool, input))
            .await
            .map_err(ApiError::Internal)?;

        info!(food_id = %food_id, comment_id = %record.id, "Comment added");
        Ok(record.into())
    }

    /// Newest comments first; `limit` is clamped to (0, 200], default 50
    pub async fn list_comments(
        pool: &PgPool,
        food_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<Comment>, ApiError> {
        let limit = clamp_comment_limit(limit);
        let records = with_timeout(
            DEFAULT_TIMEOUT,
            ReviewRepository::list_comments(pool, food_id, limit),
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Comment::from).collect())
    }

    /// Summaries for many foods, one entry per parsable id.
    /// An empty id list never reaches the database.
    pub async fn batch_summaries(
        pool: &PgPool,
        raw_ids: &[String],
    ) -> Result<HashMap<Uuid, ReviewSummary>, ApiError> {
        let ids = parse_batch_ids(raw_ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ratings = with_timeout(DEFAULT_TIMEOUT, ReviewRepository::rating_aggregates(pool, &ids))
            .await
            .map_err(ApiError::Internal)?;
        let comments = with_timeout(DEFAULT_TIMEOUT, ReviewRepository::comment_counts(pool, &ids))
            .await
            .map_err(ApiError::Internal)?;

        Ok(merge_summaries(&ids, &ratings, &comments))
    }

    async fn base_summary(pool: &PgPool, food_id: Uuid) -> Result<ReviewSummary, ApiError> {
        let ratings = with_timeout(DEFAULT_TIMEOUT, ReviewRepository::rating_aggregate(pool, food_id))
            .await
            .map_err(ApiError::Internal)?;
        let comment_count =
            with_timeout(DEFAULT_TIMEOUT, ReviewRepository::comment_count(pool, food_id))
                .await
                .map_err(ApiError::Internal)?;

        Ok(ReviewSummary {
            avg_rating: ratings.avg_rating,
            rating_count: ratings.rating_count,
            comment_count,
            ..ReviewSummary::empty(food_id)
        })
    }

    async fn has_ordered(pool: &PgPool, user_id: Uuid, food_id: Uuid) -> anyhow::Result<bool> {
        with_timeout(
            DEFAULT_TIMEOUT,
            OrderRepository::has_user_ordered(pool, user_id, food_id),
        )
        .await
    }

    async fn ensure_eligible(pool: &PgPool, user_id: Uuid, food_id: Uuid) -> Result<(), ApiError> {
        let can = Self::has_ordered(pool, user_id, food_id)
            .await
            .map_err(ApiError::Internal)?;
        if !can {
            return Err(ApiError::Forbidden(
                "You can only review food you have ordered".to_string(),
            ));
        }
        Ok(())
    }
}
