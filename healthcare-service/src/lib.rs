//! Campus healthcare service
//!
//! Students, health records, appointments and therapies. Therapies are
//! handed to the food service; systematic appointments are reported to the
//! university service.

pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
