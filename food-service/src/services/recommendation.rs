//! Food recommendations from order history
//!
//! A food is recommended when its (type1, type2) pair matches a pair the
//! user has ordered before and the user has not ordered that food itself.
//! Cancelled orders count for neither side.

use crate::db::{with_timeout, BULK_READ_TIMEOUT, DEFAULT_TIMEOUT};
use crate::error::ApiError;
use crate::repositories::{FoodRepository, OrderRepository};
use crate::services::food::into_foods;
use crate::services::order::into_orders;
use campus_shared::{CategoryPair, Food, Order};
use sqlx::PgPool;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;
use uuid::Uuid;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// What a user's history says about their taste
#[derive(Debug, Clone, Default)]
pub struct RecommendationCriteria {
    ordered_ids: HashSet<Uuid>,
    pairs: BTreeSet<CategoryPair>,
}

impl RecommendationCriteria {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut criteria = Self::default();
        for order in orders.iter().filter(|o| !o.is_cancelled()) {
            criteria.ordered_ids.insert(order.food.id);
            criteria.pairs.insert(order.food.category());
        }
        criteria
    }

    /// No usable history
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn matches(&self, food: &Food) -> bool {
        self.pairs.contains(&food.category()) && !self.ordered_ids.contains(&food.id)
    }

    pub fn pairs(&self) -> Vec<CategoryPair> {
        self.pairs.iter().copied().collect()
    }

    pub fn ordered_ids(&self) -> Vec<Uuid> {
        self.ordered_ids.iter().copied().collect()
    }
}

/// Keep matching candidates in their given order, at most five
pub fn select(criteria: &RecommendationCriteria, candidates: Vec<Food>) -> Vec<Food> {
    candidates
        .into_iter()
        .filter(|f| criteria.matches(f))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

pub struct RecommendationService;

impl RecommendationService {
    pub async fn for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Food>, ApiError> {
        let records = with_timeout(
            DEFAULT_TIMEOUT,
            OrderRepository::list_active_by_user(pool, user_id),
        )
        .await
        .map_err(ApiError::Internal)?;
        let orders = into_orders(records)?;

        let criteria = RecommendationCriteria::from_orders(&orders);
        if criteria.is_empty() {
            debug!(user_id = %user_id, "No order history, nothing to recommend");
            return Ok(Vec::new());
        }

        let candidates = with_timeout(
            BULK_READ_TIMEOUT,
            FoodRepository::find_by_categories(
                pool,
                &criteria.pairs(),
                &criteria.ordered_ids(),
                MAX_RECOMMENDATIONS as i64,
            ),
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(select(&criteria, into_foods(candidates)?))
    }
}
