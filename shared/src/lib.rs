//! Campus Services Shared Library
//!
//! Domain models, wire types and validation helpers used by the food and
//! healthcare services.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
