//! Meals the kitchen assigns to individual students

use crate::db::{with_timeout, BULK_READ_TIMEOUT, DEFAULT_TIMEOUT};
use crate::error::ApiError;
use crate::repositories::StudentFoodRepository;
use campus_shared::validation::{parse_id, validate_food_name};
use campus_shared::{AssignStudentFoodRequest, StudentFood};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

/// Blank names count as absent so a stored name is never wiped
fn provided(name: &Option<String>) -> Option<&str> {
    name.as_deref().map(str::trim).filter(|n| !n.is_empty())
}

pub struct StudentFoodService;

impl StudentFoodService {
    pub async fn list(pool: &PgPool) -> Result<Vec<StudentFood>, ApiError> {
        let records = with_timeout(BULK_READ_TIMEOUT, StudentFoodRepository::list(pool))
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(StudentFood::from).collect())
    }

    pub async fn assign(pool: &PgPool, req: AssignStudentFoodRequest) -> Result<StudentFood, ApiError> {
        let student_id = parse_id("student", &req.student_id)?;
        req.validate()?;
        validate_food_name(&req.food)?;

        let record = with_timeout(
            DEFAULT_TIMEOUT,
            StudentFoodRepository::assign(
                pool,
                student_id,
                req.food.trim(),
                provided(&req.first_name),
                provided(&req.last_name),
            ),
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(student_id = %student_id, food = %req.food.trim(), "Student food assigned");
        Ok(record.into())
    }
}
