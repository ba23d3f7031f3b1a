//! Authentication extractor
//!
//! Handlers take `AuthUser` for protected routes and `Option<AuthUser>` where
//! a token only enriches the response.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use campus_shared::{validation::display_name, UserType};
use uuid::Uuid;

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub user_type: UserType,
    pub first_name: String,
    pub last_name: String,
}

impl AuthUser {
    pub fn is_student(&self) -> bool {
        self.user_type == UserType::Student
    }

    /// Name recorded as a comment's author
    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name)
    }

    /// Reject callers that are not students
    pub fn require_student(&self) -> Result<(), ApiError> {
        if self.is_student() {
            Ok(())
        } else {
            Err(ApiError::Forbidden(
                "Only students can review food".to_string(),
            ))
        }
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        // Scheme is matched case-insensitively
        let token = match auth_header.split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
            _ => {
                return Err(ApiError::Unauthorized(
                    "Invalid authorization format".to_string(),
                ))
            }
        };
        if token.is_empty() {
            return Err(ApiError::Unauthorized("Empty token".to_string()));
        }

        let claims = app_state
            .jwt()
            .validate_token(token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // FromStr for UserType is infallible
        let user_type = claims.user_type.parse().unwrap_or(UserType::Other);

        Ok(AuthUser {
            user_id,
            user_type,
            first_name: claims.first_name,
            last_name: claims.last_name,
        })
    }
}
