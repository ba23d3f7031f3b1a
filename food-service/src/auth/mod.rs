//! Authentication module
//!
//! Verifies bearer tokens issued by the campus auth service.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtService, TokenSubject};
pub use middleware::AuthUser;
