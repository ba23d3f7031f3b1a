//! Clients for peer services

pub mod healthcare;

pub use healthcare::HealthcareClient;
