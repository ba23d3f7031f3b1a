//! Order routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::routes::path_id;
use crate::services::OrderService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use campus_shared::{CreateOrderRequest, Order, UpdateOrderStatusRequest};

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/order", get(list_active_orders).post(create_order))
        .route("/order/:id", put(update_order_status))
        .route("/order/:id/cancel", put(cancel_order))
        .route("/my-orders", get(my_orders))
        .route("/accepted-orders", get(accepted_orders))
}

/// POST /order - Order a food for the caller
async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let food_id = path_id("food", &req.food_id)?;
    let order = OrderService::create(state.db(), auth.user_id, food_id).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /order - Every order that was not cancelled
async fn list_active_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(OrderService::list_active(state.db()).await?))
}

/// GET /my-orders - Caller's orders, cancelled ones included
async fn my_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(OrderService::list_for_user(state.db(), auth.user_id).await?))
}

async fn accepted_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(OrderService::list_accepted(state.db()).await?))
}

/// PUT /order/:id - Accept or un-accept an order
async fn update_order_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("order", &id)?;
    OrderService::set_status(state.db(), id, &req.status).await?;
    Ok(StatusCode::OK)
}

/// PUT /order/:id/cancel
async fn cancel_order(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("order", &id)?;
    OrderService::cancel(state.db(), id).await?;
    Ok(StatusCode::OK)
}
