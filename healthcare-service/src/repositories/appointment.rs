//! Appointment repository

use anyhow::Result;
use campus_shared::Appointment;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub student_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub door_number: i32,
    pub description: String,
    pub systematic: bool,
    pub faculty_name: String,
    pub field_of_study: String,
    pub reserved: bool,
}

impl From<AppointmentRecord> for Appointment {
    fn from(r: AppointmentRecord) -> Self {
        Appointment {
            id: r.id,
            student_id: r.student_id,
            doctor_id: r.doctor_id,
            date: r.date,
            door_number: r.door_number,
            description: r.description,
            systematic: r.systematic,
            faculty_name: r.faculty_name,
            field_of_study: r.field_of_study,
            reserved: r.reserved,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub doctor_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub door_number: i32,
    pub description: String,
    pub systematic: bool,
    pub faculty_name: String,
    pub field_of_study: String,
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentChanges {
    pub doctor_id: Option<Uuid>,
    pub date: Option<DateTime<Utc>>,
    pub door_number: Option<i32>,
    pub description: Option<String>,
    pub systematic: Option<bool>,
    pub faculty_name: Option<String>,
    pub field_of_study: Option<String>,
}

const APPOINTMENT_COLUMNS: &str = "id, student_id, doctor_id, date, door_number, description, \
                                   systematic, faculty_name, field_of_study, reserved";

pub struct AppointmentRepository;

impl AppointmentRepository {
    /// New appointments are always unreserved
    pub async fn create(pool: &PgPool, input: NewAppointment) -> Result<AppointmentRecord> {
        let record = sqlx::query_as::<_, AppointmentRecord>(&format!(
            r#"
            INSERT INTO appointments (doctor_id, date, door_number, description,
                                      systematic, faculty_name, field_of_study, reserved)
            VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE)
            RETURNING {APPOINTMENT_COLUMNS}
            "#
        ))
        .bind(input.doctor_id)
        .bind(input.date)
        .bind(input.door_number)
        .bind(&input.description)
        .bind(input.systematic)
        .bind(&input.faculty_name)
        .bind(&input.field_of_study)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<AppointmentRecord>> {
        let record = sqlx::query_as::<_, AppointmentRecord>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AppointmentRecord>> {
        let records = sqlx::query_as::<_, AppointmentRecord>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY date, id"
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn list_reserved(pool: &PgPool) -> Result<Vec<AppointmentRecord>> {
        let records = sqlx::query_as::<_, AppointmentRecord>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE reserved ORDER BY date, id"
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Unreserved slots dated at or after `now`
    pub async fn list_available(pool: &PgPool, now: DateTime<Utc>) -> Result<Vec<AppointmentRecord>> {
        let records = sqlx::query_as::<_, AppointmentRecord>(&format!(
            r#"
            SELECT {APPOINTMENT_COLUMNS} FROM appointments
            WHERE NOT reserved AND date >= $1
            ORDER BY date, id
            "#
        ))
        .bind(now)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn list_reserved_for_student(
        pool: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<AppointmentRecord>> {
        let records = sqlx::query_as::<_, AppointmentRecord>(&format!(
            r#"
            SELECT {APPOINTMENT_COLUMNS} FROM appointments
            WHERE reserved AND student_id = $1
            ORDER BY date, id
            "#
        ))
        .bind(student_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: AppointmentChanges,
    ) -> Result<Option<AppointmentRecord>> {
        let record = sqlx::query_as::<_, AppointmentRecord>(&format!(
            r#"
            UPDATE appointments
            SET doctor_id = COALESCE($2, doctor_id),
                date = COALESCE($3, date),
                door_number = COALESCE($4, door_number),
                description = COALESCE($5, description),
                systematic = COALESCE($6, systematic),
                faculty_name = COALESCE($7, faculty_name),
                field_of_study = COALESCE($8, field_of_study)
            WHERE id = $1
            RETURNING {APPOINTMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.doctor_id)
        .bind(changes.date)
        .bind(changes.door_number)
        .bind(&changes.description)
        .bind(changes.systematic)
        .bind(&changes.faculty_name)
        .bind(&changes.field_of_study)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Mark reserved by `student_id`; false when the appointment is unknown
    pub async fn reserve(pool: &PgPool, id: Uuid, student_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE appointments SET reserved = TRUE, student_id = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(student_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Unreserve and clear the student; false when the appointment is unknown
    pub async fn release(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE appointments SET reserved = FALSE, student_id = NULL WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete and return the removed row
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<AppointmentRecord>> {
        let record = sqlx::query_as::<_, AppointmentRecord>(&format!(
            "DELETE FROM appointments WHERE id = $1 RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
