//! Ratings and comments repository
//!
//! Summaries are computed on read; nothing aggregated is persisted.

use anyhow::Result;
use campus_shared::Comment;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Rating record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RatingRecord {
    pub id: Uuid,
    pub food_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: Uuid,
    pub food_id: Uuid,
    pub user_id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRecord> for Comment {
    fn from(r: CommentRecord) -> Self {
        Comment {
            id: r.id,
            food_id: r.food_id,
            user_id: r.user_id,
            author: r.author,
            text: r.text,
            created_at: r.created_at,
        }
    }
}

/// Rating aggregate of a single food
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct RatingAggregate {
    pub avg_rating: f64,
    pub rating_count: i64,
}

/// Per-food rating aggregate from a grouped query
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct FoodRatingAggregate {
    pub food_id: Uuid,
    pub avg_rating: f64,
    pub rating_count: i64,
}

/// Per-food comment count from a grouped query
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct FoodCommentCount {
    pub food_id: Uuid,
    pub comment_count: i64,
}

/// Input for adding a comment; text is already trimmed and validated
#[derive(Debug, Clone)]
pub struct NewComment {
    pub food_id: Uuid,
    pub user_id: Uuid,
    pub author: String,
    pub text: String,
}

/// Review repository
pub struct ReviewRepository;

impl ReviewRepository {
    /// Insert or update the caller's rating in one statement.
    /// `created_at` is only set on insert.
    pub async fn upsert_rating(
        pool: &PgPool,
        food_id: Uuid,
        user_id: Uuid,
        rating: i32,
    ) -> Result<RatingRecord> {
        let record = sqlx::query_as::<_, RatingRecord>(
            r#"
            INSERT INTO food_ratings (food_id, user_id, rating)
            VALUES ($1, $2, $3)
            ON CONFLICT (food_id, user_id)
            DO UPDATE SET rating = EXCLUDED.rating, updated_at = NOW()
            RETURNING id, food_id, user_id, rating, created_at, updated_at
            "#,
        )
        .bind(food_id)
        .bind(user_id)
        .bind(rating)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn get_my_rating(pool: &PgPool, food_id: Uuid, user_id: Uuid) -> Result<Option<i32>> {
        let rating = sqlx::query_scalar::<_, i32>(
            "SELECT rating FROM food_ratings WHERE food_id = $1 AND user_id = $2",
        )
        .bind(food_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(rating)
    }

    pub async fn add_comment(pool: &PgPool, input: NewComment) -> Result<CommentRecord> {
        let record = sqlx::query_as::<_, CommentRecord>(
            r#"
            INSERT INTO food_comments (food_id, user_id, author, text)
            VALUES ($1, $2, $3, $4)
            RETURNING id, food_id, user_id, author, text, created_at
            "#,
        )
        .bind(input.food_id)
        .bind(input.user_id)
        .bind(&input.author)
        .bind(&input.text)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Newest first
    pub async fn list_comments(pool: &PgPool, food_id: Uuid, limit: i64) -> Result<Vec<CommentRecord>> {
        let records = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, food_id, user_id, author, text, created_at
            FROM food_comments
            WHERE food_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(food_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Average and count of ratings; zeros when the food has none
    pub async fn rating_aggregate(pool: &PgPool, food_id: Uuid) -> Result<RatingAggregate> {
        let aggregate = sqlx::query_as::<_, RatingAggregate>(
            r#"
            SELECT COALESCE(AVG(rating::float8), 0)::float8 AS avg_rating,
                   COUNT(*) AS rating_count
            FROM food_ratings
            WHERE food_id = $1
            "#,
        )
        .bind(food_id)
        .fetch_one(pool)
        .await?;

        Ok(aggregate)
    }

    pub async fn comment_count(pool: &PgPool, food_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM food_comments WHERE food_id = $1")
            .bind(food_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// One grouped pass over ratings; foods without ratings are absent
    pub async fn rating_aggregates(pool: &PgPool, food_ids: &[Uuid]) -> Result<Vec<FoodRatingAggregate>> {
        let rows = sqlx::query_as::<_, FoodRatingAggregate>(
            r#"
            SELECT food_id,
                   AVG(rating::float8)::float8 AS avg_rating,
                   COUNT(*) AS rating_count
            FROM food_ratings
            WHERE food_id = ANY($1)
            GROUP BY food_id
            "#,
        )
        .bind(food_ids)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// One grouped pass over comments; foods without comments are absent
    pub async fn comment_counts(pool: &PgPool, food_ids: &[Uuid]) -> Result<Vec<FoodCommentCount>> {
        let rows = sqlx::query_as::<_, FoodCommentCount>(
            r#"
            SELECT food_id, COUNT(*) AS comment_count
            FROM food_comments
            WHERE food_id = ANY($1)
            GROUP BY food_id
            "#,
        )
        .bind(food_ids)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
