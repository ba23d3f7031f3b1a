//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod food;
pub mod order;
pub mod review;
pub mod student_food;
pub mod therapy;

pub use food::{CreateFood, FoodRecord, FoodRepository, UpdateFood};
pub use order::{OrderRecord, OrderRepository};
pub use review::{
    CommentRecord, FoodCommentCount, FoodRatingAggregate, NewComment, RatingAggregate,
    RatingRecord, ReviewRepository,
};
pub use student_food::{StudentFoodRecord, StudentFoodRepository};
pub use therapy::{TherapyRecord, TherapyRepository};
