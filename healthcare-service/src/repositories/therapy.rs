//! Therapy repository

use anyhow::{Context, Result};
use campus_shared::{TherapyData, TherapyStatus};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TherapyRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub diagnosis: String,
    pub status: String,
}

impl TryFrom<TherapyRow> for TherapyData {
    type Error = anyhow::Error;

    fn try_from(row: TherapyRow) -> Result<Self> {
        Ok(TherapyData {
            therapy_id: row.id,
            student_id: row.student_id,
            diagnosis: row.diagnosis,
            status: row.status.parse().context("stored therapy has unknown status")?,
        })
    }
}

pub struct TherapyRepository;

impl TherapyRepository {
    pub async fn create(
        pool: &PgPool,
        student_id: Uuid,
        diagnosis: &str,
        status: TherapyStatus,
    ) -> Result<TherapyRow> {
        let row = sqlx::query_as::<_, TherapyRow>(
            r#"
            INSERT INTO therapies (student_id, diagnosis, status)
            VALUES ($1, $2, $3)
            RETURNING id, student_id, diagnosis, status
            "#,
        )
        .bind(student_id)
        .bind(diagnosis)
        .bind(status.as_str())
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TherapyRow>> {
        let row = sqlx::query_as::<_, TherapyRow>(
            "SELECT id, student_id, diagnosis, status FROM therapies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TherapyRow>> {
        let rows = sqlx::query_as::<_, TherapyRow>(
            "SELECT id, student_id, diagnosis, status FROM therapies ORDER BY created_at, id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        diagnosis: Option<&str>,
        status: Option<TherapyStatus>,
    ) -> Result<Option<TherapyRow>> {
        let row = sqlx::query_as::<_, TherapyRow>(
            r#"
            UPDATE therapies
            SET diagnosis = COALESCE($2, diagnosis),
                status = COALESCE($3, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, student_id, diagnosis, status
            "#,
        )
        .bind(id)
        .bind(diagnosis)
        .bind(status.map(|s| s.as_str()))
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM therapies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_becomes_therapy_id() {
        let row = TherapyRow {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            diagnosis: "Anemia".to_string(),
            status: "done".to_string(),
        };
        let id = row.id;
        let therapy = TherapyData::try_from(row).unwrap();
        assert_eq!(therapy.therapy_id, id);
        assert_eq!(therapy.status, TherapyStatus::Done);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let row = TherapyRow {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            diagnosis: "Anemia".to_string(),
            status: "pending".to_string(),
        };
        assert!(TherapyData::try_from(row).is_err());
    }
}
