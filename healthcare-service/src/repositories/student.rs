//! Student repository

use anyhow::{bail, Result};
use campus_shared::{Gender, Student};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<i32>,
    pub residence: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub health_record_id: Option<Uuid>,
}

pub(crate) fn gender_to_db(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    }
}

fn gender_from_db(raw: &str) -> Result<Gender> {
    match raw {
        "Male" => Ok(Gender::Male),
        "Female" => Ok(Gender::Female),
        other => bail!("stored student has unknown gender {other:?}"),
    }
}

impl TryFrom<StudentRecord> for Student {
    type Error = anyhow::Error;

    fn try_from(record: StudentRecord) -> Result<Self> {
        Ok(Student {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            gender: record.gender.as_deref().map(gender_from_db).transpose()?,
            date_of_birth: record.date_of_birth,
            residence: record.residence,
            email: record.email,
            username: record.username,
            health_record_id: record.health_record_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<i32>,
    pub residence: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct StudentChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<i32>,
    pub residence: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

const STUDENT_COLUMNS: &str = "id, first_name, last_name, gender, date_of_birth, residence, \
                               email, username, health_record_id";

pub struct StudentRepository;

impl StudentRepository {
    /// Insert a student together with its first health record, in one
    /// transaction. `record_data` is the initial record text.
    pub async fn create_with_record(
        pool: &PgPool,
        input: NewStudent,
        record_data: &str,
    ) -> Result<StudentRecord> {
        let student_id = Uuid::new_v4();
        let mut tx = pool.begin().await?;

        let record_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO health_records (user_id, record_data)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(student_id)
        .bind(record_data)
        .fetch_one(&mut *tx)
        .await?;

        let student = sqlx::query_as::<_, StudentRecord>(&format!(
            r#"
            INSERT INTO students (id, first_name, last_name, gender, date_of_birth,
                                  residence, email, username, health_record_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(student_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.gender.map(gender_to_db))
        .bind(input.date_of_birth)
        .bind(&input.residence)
        .bind(&input.email)
        .bind(&input.username)
        .bind(record_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(student)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<StudentRecord>> {
        let student = sqlx::query_as::<_, StudentRecord>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<StudentRecord>> {
        let students = sqlx::query_as::<_, StudentRecord>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY last_name, first_name, id"
        ))
        .fetch_all(pool)
        .await?;

        Ok(students)
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: StudentChanges,
    ) -> Result<Option<StudentRecord>> {
        let student = sqlx::query_as::<_, StudentRecord>(&format!(
            r#"
            UPDATE students
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                gender = COALESCE($4, gender),
                date_of_birth = COALESCE($5, date_of_birth),
                residence = COALESCE($6, residence),
                email = COALESCE($7, email),
                username = COALESCE($8, username),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(changes.gender.map(gender_to_db))
        .bind(changes.date_of_birth)
        .bind(&changes.residence)
        .bind(&changes.email)
        .bind(&changes.username)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    /// Returns false when no student matched
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
