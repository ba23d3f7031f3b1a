//! Health record repository

use anyhow::Result;
use campus_shared::HealthRecord;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HealthRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub record_data: String,
}

impl From<HealthRecordRow> for HealthRecord {
    fn from(row: HealthRecordRow) -> Self {
        HealthRecord {
            id: row.id,
            user_id: row.user_id,
            record_data: row.record_data,
        }
    }
}

pub struct HealthRecordRepository;

impl HealthRecordRepository {
    pub async fn create(pool: &PgPool, user_id: Uuid, record_data: &str) -> Result<HealthRecordRow> {
        let row = sqlx::query_as::<_, HealthRecordRow>(
            r#"
            INSERT INTO health_records (user_id, record_data)
            VALUES ($1, $2)
            RETURNING id, user_id, record_data
            "#,
        )
        .bind(user_id)
        .bind(record_data)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn exists_for_user(pool: &PgPool, user_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM health_records WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<HealthRecordRow>> {
        let row = sqlx::query_as::<_, HealthRecordRow>(
            "SELECT id, user_id, record_data FROM health_records WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<HealthRecordRow>> {
        let rows = sqlx::query_as::<_, HealthRecordRow>(
            "SELECT id, user_id, record_data FROM health_records ORDER BY created_at, id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(pool: &PgPool, id: Uuid, record_data: &str) -> Result<Option<HealthRecordRow>> {
        let row = sqlx::query_as::<_, HealthRecordRow>(
            r#"
            UPDATE health_records
            SET record_data = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, record_data
            "#,
        )
        .bind(id)
        .bind(record_data)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }
}
