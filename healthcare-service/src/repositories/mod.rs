//! Repository layer for database operations

pub mod appointment;
pub mod health_record;
pub mod student;
pub mod therapy;

pub use appointment::*;
pub use health_record::*;
pub use student::*;
pub use therapy::*;
