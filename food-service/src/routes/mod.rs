//! Route definitions for the food service API
//!
//! Paths mirror the ones campus clients and the healthcare service already
//! call, so everything is mounted at the root.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use campus_shared::validation::parse_id;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

mod food;
mod health;
mod order;
mod recommendation;
mod review;
mod student_food;
mod therapy;

#[cfg(test)]
mod auth_tests;

pub use food::food_routes;
pub use order::order_routes;
pub use recommendation::recommendation_routes;
pub use review::review_routes;
pub use student_food::student_food_routes;
pub use therapy::therapy_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(food_routes())
        .merge(order_routes())
        .merge(review_routes())
        .merge(therapy_routes())
        .merge(student_food_routes())
        .merge(recommendation_routes())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(60)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse an id taken from the path
pub(crate) fn path_id(what: &'static str, raw: &str) -> Result<Uuid, ApiError> {
    Ok(parse_id(what, raw)?)
}
