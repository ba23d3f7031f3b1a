//! Food repository for database operations

use anyhow::{Context, Result};
use campus_shared::{CategoryPair, Food};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Food record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub type1: String,
    pub type2: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<FoodRecord> for Food {
    type Error = anyhow::Error;

    fn try_from(record: FoodRecord) -> Result<Self> {
        Ok(Food {
            id: record.id,
            user_id: record.user_id,
            food_name: record.food_name,
            type1: record.type1.parse().context("stored food has unknown type1")?,
            type2: record.type2.parse().context("stored food has unknown type2")?,
        })
    }
}

/// Input for creating a food
#[derive(Debug, Clone)]
pub struct CreateFood {
    pub user_id: Uuid,
    pub food_name: String,
    pub category: CategoryPair,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateFood {
    pub food_name: Option<String>,
    pub type1: Option<String>,
    pub type2: Option<String>,
}

/// Food repository
pub struct FoodRepository;

impl FoodRepository {
    pub async fn create(pool: &PgPool, input: CreateFood) -> Result<FoodRecord> {
        let record = sqlx::query_as::<_, FoodRecord>(
            r#"
            INSERT INTO foods (user_id, food_name, type1, type2)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, food_name, type1, type2, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.food_name)
        .bind(input.category.type1.as_str())
        .bind(input.category.type2.as_str())
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<FoodRecord>> {
        let record = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, user_id, food_name, type1, type2, created_at
            FROM foods
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// List foods, optionally only those of one cook
    pub async fn list(pool: &PgPool, cook_id: Option<Uuid>) -> Result<Vec<FoodRecord>> {
        let records = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, user_id, food_name, type1, type2, created_at
            FROM foods
            WHERE ($1::uuid IS NULL OR user_id = $1)
            ORDER BY created_at, id
            "#,
        )
        .bind(cook_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn update(pool: &PgPool, id: Uuid, input: UpdateFood) -> Result<Option<FoodRecord>> {
        let record = sqlx::query_as::<_, FoodRecord>(
            r#"
            UPDATE foods
            SET food_name = COALESCE($2, food_name),
                type1 = COALESCE($3, type1),
                type2 = COALESCE($4, type2)
            WHERE id = $1
            RETURNING id, user_id, food_name, type1, type2, created_at
            "#,
        )
        .bind(id)
        .bind(&input.food_name)
        .bind(&input.type1)
        .bind(&input.type2)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Returns false when nothing was deleted
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Foods whose category pair is one of `pairs` and whose id is not in
    /// `exclude`, in insertion order
    pub async fn find_by_categories(
        pool: &PgPool,
        pairs: &[CategoryPair],
        exclude: &[Uuid],
        limit: i64,
    ) -> Result<Vec<FoodRecord>> {
        let type1s: Vec<String> = pairs.iter().map(|p| p.type1.to_string()).collect();
        let type2s: Vec<String> = pairs.iter().map(|p| p.type2.to_string()).collect();

        let records = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, user_id, food_name, type1, type2, created_at
            FROM foods
            WHERE (type1, type2) IN (SELECT * FROM UNNEST($1::text[], $2::text[]))
              AND NOT (id = ANY($3))
            ORDER BY created_at, id
            LIMIT $4
            "#,
        )
        .bind(&type1s)
        .bind(&type2s)
        .bind(exclude)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
