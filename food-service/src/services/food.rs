//! Food catalogue service

use crate::db::{with_timeout, BULK_READ_TIMEOUT, DEFAULT_TIMEOUT};
use crate::error::ApiError;
use crate::repositories::{CreateFood, FoodRecord, FoodRepository, UpdateFood};
use campus_shared::validation::validate_food_name;
use campus_shared::{
    CategoryPair, CreateFoodRequest, DietType, Food, MealType, UpdateFoodRequest, ValidationError,
};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Parse a `(type1, type2)` pair as sent by clients
pub fn parse_category(type1: &str, type2: &str) -> Result<CategoryPair, ValidationError> {
    Ok(CategoryPair::new(type1.parse()?, type2.parse()?))
}

pub(crate) fn into_foods(records: Vec<FoodRecord>) -> Result<Vec<Food>, ApiError> {
    records
        .into_iter()
        .map(|r| Food::try_from(r).map_err(ApiError::Internal))
        .collect()
}

/// Food service for business logic
pub struct FoodService;

impl FoodService {
    pub async fn list(pool: &PgPool, cook_id: Option<Uuid>) -> Result<Vec<Food>, ApiError> {
        let records = with_timeout(BULK_READ_TIMEOUT, FoodRepository::list(pool, cook_id))
            .await
            .map_err(ApiError::Internal)?;

        into_foods(records)
    }

    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Food, ApiError> {
        let record = with_timeout(DEFAULT_TIMEOUT, FoodRepository::find_by_id(pool, id))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

        Food::try_from(record).map_err(ApiError::Internal)
    }

    /// Add a food owned by `user_id`
    pub async fn create(pool: &PgPool, user_id: Uuid, req: CreateFoodRequest) -> Result<Food, ApiError> {
        req.validate()?;
        validate_food_name(&req.food_name)?;
        let category = parse_category(&req.type1, &req.type2)?;

        let input = CreateFood {
            user_id,
            food_name: req.food_name.trim().to_string(),
            category,
        };
        let record = with_timeout(DEFAULT_TIMEOUT, FoodRepository::create(pool, input))
            .await
            .map_err(ApiError::Internal)?;

        info!(food_id = %record.id, cook_id = %user_id, "Food created");
        Food::try_from(record).map_err(ApiError::Internal)
    }

    pub async fn update(pool: &PgPool, id: Uuid, req: UpdateFoodRequest) -> Result<Food, ApiError> {
        req.validate()?;
        if let Some(name) = &req.food_name {
            validate_food_name(name)?;
        }
        // Store canonical spellings
        let type1 = req
            .type1
            .as_deref()
            .map(|t| t.parse::<MealType>().map(|t| t.to_string()))
            .transpose()?;
        let type2 = req
            .type2
            .as_deref()
            .map(|t| t.parse::<DietType>().map(|t| t.to_string()))
            .transpose()?;

        let input = UpdateFood {
            food_name: req.food_name.map(|n| n.trim().to_string()),
            type1,
            type2,
        };
        let record = with_timeout(DEFAULT_TIMEOUT, FoodRepository::update(pool, id, input))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

        Food::try_from(record).map_err(ApiError::Internal)
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = with_timeout(DEFAULT_TIMEOUT, FoodRepository::delete(pool, id))
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Food not found".to_string()));
        }
        info!(food_id = %id, "Food deleted");
        Ok(())
    }
}
