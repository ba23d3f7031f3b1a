//! Business logic layer

pub mod appointment;
pub mod student;
pub mod therapy;

pub use appointment::AppointmentService;
pub use student::{HealthRecordService, StudentService};
pub use therapy::TherapyService;
