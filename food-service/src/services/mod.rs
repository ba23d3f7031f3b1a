//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and peer services.

pub mod food;
pub mod order;
pub mod recommendation;
pub mod review;
pub mod student_food;
pub mod therapy;

pub use food::FoodService;
pub use order::OrderService;
pub use recommendation::RecommendationService;
pub use review::ReviewService;
pub use student_food::StudentFoodService;
pub use therapy::TherapyService;
