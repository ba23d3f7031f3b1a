//! Therapy repository for database operations

use anyhow::{Context, Result};
use campus_shared::{TherapyData, TherapyStatus};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TherapyRecord {
    pub therapy_id: Uuid,
    pub student_id: Uuid,
    pub diagnosis: String,
    pub status: String,
    pub received_at: DateTime<Utc>,
}

impl TryFrom<TherapyRecord> for TherapyData {
    type Error = anyhow::Error;

    fn try_from(record: TherapyRecord) -> Result<Self> {
        Ok(TherapyData {
            therapy_id: record.therapy_id,
            student_id: record.student_id,
            diagnosis: record.diagnosis,
            status: record.status.parse().context("stored therapy has unknown status")?,
        })
    }
}

/// Therapy repository
pub struct TherapyRepository;

impl TherapyRepository {
    /// Store a therapy pushed by healthcare. A repeated push of the same
    /// therapy overwrites the stored copy.
    pub async fn save(pool: &PgPool, therapy: &TherapyData) -> Result<TherapyRecord> {
        let record = sqlx::query_as::<_, TherapyRecord>(
            r#"
            INSERT INTO therapies (therapy_id, student_id, diagnosis, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (therapy_id)
            DO UPDATE SET student_id = EXCLUDED.student_id,
                          diagnosis = EXCLUDED.diagnosis,
                          status = EXCLUDED.status
            RETURNING therapy_id, student_id, diagnosis, status, received_at
            "#,
        )
        .bind(therapy.therapy_id)
        .bind(therapy.student_id)
        .bind(&therapy.diagnosis)
        .bind(therapy.status.as_str())
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<TherapyRecord>> {
        let records = sqlx::query_as::<_, TherapyRecord>(
            r#"
            SELECT therapy_id, student_id, diagnosis, status, received_at
            FROM therapies
            ORDER BY received_at
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn list_by_status(pool: &PgPool, status: TherapyStatus) -> Result<Vec<TherapyRecord>> {
        let records = sqlx::query_as::<_, TherapyRecord>(
            r#"
            SELECT therapy_id, student_id, diagnosis, status, received_at
            FROM therapies
            WHERE status = $1
            ORDER BY received_at
            "#,
        )
        .bind(status.as_str())
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Returns false when no therapy has this id
    pub async fn set_status(pool: &PgPool, therapy_id: Uuid, status: TherapyStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE therapies SET status = $2 WHERE therapy_id = $1")
            .bind(therapy_id)
            .bind(status.as_str())
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
