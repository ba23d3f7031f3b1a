//! Order service

use crate::db::{with_timeout, BULK_READ_TIMEOUT, DEFAULT_TIMEOUT, STATUS_UPDATE_TIMEOUT};
use crate::error::ApiError;
use crate::repositories::{OrderRecord, OrderRepository};
use crate::services::FoodService;
use campus_shared::{AcceptanceStatus, Order};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

pub(crate) fn into_orders(records: Vec<OrderRecord>) -> Result<Vec<Order>, ApiError> {
    records
        .into_iter()
        .map(|r| Order::try_from(r).map_err(ApiError::Internal))
        .collect()
}

/// Order service for business logic
pub struct OrderService;

impl OrderService {
    /// Place an order; the current food is snapshotted into it
    pub async fn create(pool: &PgPool, user_id: Uuid, food_id: Uuid) -> Result<Order, ApiError> {
        let food = FoodService::get(pool, food_id).await?;

        let record = with_timeout(DEFAULT_TIMEOUT, OrderRepository::create(pool, user_id, &food))
            .await
            .map_err(ApiError::Internal)?;

        info!(order_id = %record.id, food_id = %food_id, user_id = %user_id, "Order placed");
        Order::try_from(record).map_err(ApiError::Internal)
    }

    /// All non-cancelled orders
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Order>, ApiError> {
        let records = with_timeout(BULK_READ_TIMEOUT, OrderRepository::list_active(pool))
            .await
            .map_err(ApiError::Internal)?;

        into_orders(records)
    }

    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Order>, ApiError> {
        let records = with_timeout(DEFAULT_TIMEOUT, OrderRepository::list_by_user(pool, user_id))
            .await
            .map_err(ApiError::Internal)?;

        into_orders(records)
    }

    pub async fn list_accepted(pool: &PgPool) -> Result<Vec<Order>, ApiError> {
        let records = with_timeout(BULK_READ_TIMEOUT, OrderRepository::list_accepted(pool))
            .await
            .map_err(ApiError::Internal)?;

        into_orders(records)
    }

    /// Set the acceptance status from its wire name
    pub async fn set_status(pool: &PgPool, id: Uuid, status: &str) -> Result<(), ApiError> {
        let status: AcceptanceStatus = status.parse()?;

        let updated = with_timeout(
            STATUS_UPDATE_TIMEOUT,
            OrderRepository::set_acceptance(pool, id, status),
        )
        .await
        .map_err(ApiError::Internal)?;

        if !updated {
            return Err(ApiError::NotFound("Order not found".to_string()));
        }
        info!(order_id = %id, status = status.as_str(), "Order status updated");
        Ok(())
    }

    pub async fn cancel(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let cancelled = with_timeout(STATUS_UPDATE_TIMEOUT, OrderRepository::cancel(pool, id))
            .await
            .map_err(ApiError::Internal)?;

        if !cancelled {
            return Err(ApiError::NotFound("Order not found".to_string()));
        }
        info!(order_id = %id, "Order cancelled");
        Ok(())
    }
}
