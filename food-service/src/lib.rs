//! Campus food service
//!
//! Foods, orders, reviews and recommendations for students, plus the kitchen
//! side of the therapy exchange with the healthcare service.

pub mod auth;
pub mod cache;
pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
