//! Per-student meal assignments

use anyhow::Result;
use campus_shared::StudentFood;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentFoodRecord {
    pub student_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub food: Option<String>,
}

impl From<StudentFoodRecord> for StudentFood {
    fn from(r: StudentFoodRecord) -> Self {
        StudentFood {
            student_id: r.student_id,
            first_name: r.first_name,
            last_name: r.last_name,
            food: r.food,
        }
    }
}

pub struct StudentFoodRepository;

impl StudentFoodRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<StudentFoodRecord>> {
        let records = sqlx::query_as::<_, StudentFoodRecord>(
            r#"
            SELECT student_id, first_name, last_name, food
            FROM student_food
            ORDER BY last_name, first_name, student_id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Set a student's meal, creating the row on first assignment. Names
    /// passed as `None` keep their stored value.
    pub async fn assign(
        pool: &PgPool,
        student_id: Uuid,
        food: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<StudentFoodRecord> {
        let record = sqlx::query_as::<_, StudentFoodRecord>(
            r#"
            INSERT INTO student_food (student_id, food, first_name, last_name)
            VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''))
            ON CONFLICT (student_id)
            DO UPDATE SET food = EXCLUDED.food,
                          first_name = COALESCE($3, student_food.first_name),
                          last_name = COALESCE($4, student_food.last_name),
                          updated_at = NOW()
            RETURNING student_id, first_name, last_name, food
            "#,
        )
        .bind(student_id)
        .bind(food)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
