//! Order repository for database operations

use anyhow::{Context, Result};
use campus_shared::{AcceptanceStatus, CancellationStatus, Food, Order};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Order record with its flattened food snapshot
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_id: Uuid,
    pub food_user_id: Uuid,
    pub food_name: String,
    pub food_type1: String,
    pub food_type2: String,
    pub acceptance_status: String,
    pub cancellation_status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = anyhow::Error;

    fn try_from(record: OrderRecord) -> Result<Self> {
        Ok(Order {
            id: record.id,
            food: Food {
                id: record.food_id,
                user_id: record.food_user_id,
                food_name: record.food_name,
                type1: record.food_type1.parse().context("order snapshot has unknown type1")?,
                type2: record.food_type2.parse().context("order snapshot has unknown type2")?,
            },
            user_id: record.user_id,
            acceptance: record
                .acceptance_status
                .parse()
                .context("order has unknown acceptance status")?,
            cancellation: record
                .cancellation_status
                .parse()
                .context("order has unknown cancellation status")?,
            created_at: record.created_at,
        })
    }
}

const ORDER_COLUMNS: &str = "id, user_id, food_id, food_user_id, food_name, food_type1, \
     food_type2, acceptance_status, cancellation_status, created_at";

/// Order repository
pub struct OrderRepository;

impl OrderRepository {
    /// Place an order for `food`, snapshotting it into the row.
    /// New orders are pending and not cancelled.
    pub async fn create(pool: &PgPool, user_id: Uuid, food: &Food) -> Result<OrderRecord> {
        let sql = format!(
            r#"
            INSERT INTO orders (user_id, food_id, food_user_id, food_name, food_type1, food_type2,
                                acceptance_status, cancellation_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ORDER_COLUMNS}
            "#
        );
        let record = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(user_id)
            .bind(food.id)
            .bind(food.user_id)
            .bind(&food.food_name)
            .bind(food.type1.as_str())
            .bind(food.type2.as_str())
            .bind(AcceptanceStatus::Pending.as_str())
            .bind(CancellationStatus::Active.as_str())
            .fetch_one(pool)
            .await?;

        Ok(record)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<OrderRecord>> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        let record = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// All orders that were not cancelled
    pub async fn list_active(pool: &PgPool) -> Result<Vec<OrderRecord>> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE cancellation_status <> $1 ORDER BY created_at"
        );
        let records = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(CancellationStatus::Cancelled.as_str())
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Every order of one user, any status, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<OrderRecord>> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        );
        let records = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Non-cancelled orders of one user
    pub async fn list_active_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<OrderRecord>> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE user_id = $1 AND cancellation_status <> $2 ORDER BY created_at"
        );
        let records = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(user_id)
            .bind(CancellationStatus::Cancelled.as_str())
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    pub async fn list_accepted(pool: &PgPool) -> Result<Vec<OrderRecord>> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE acceptance_status = $1 ORDER BY created_at"
        );
        let records = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(AcceptanceStatus::Accepted.as_str())
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Returns false when the order does not exist
    pub async fn set_acceptance(pool: &PgPool, id: Uuid, status: AcceptanceStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE orders SET acceptance_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when the order does not exist
    pub async fn cancel(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("UPDATE orders SET cancellation_status = $2 WHERE id = $1")
            .bind(id)
            .bind(CancellationStatus::Cancelled.as_str())
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// True iff the user has any order for the food, cancelled ones included
    pub async fn has_user_ordered(pool: &PgPool, user_id: Uuid, food_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM orders WHERE user_id = $1 AND food_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(food_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
