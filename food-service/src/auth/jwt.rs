//! JWT token validation
//!
//! Tokens are issued by the campus auth service and carry the caller's
//! identity. Keys are pre-computed once and shared through `AppState`.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
///
/// Aliases accept the field names used by the legacy auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    #[serde(alias = "Uid")]
    pub sub: String,
    #[serde(alias = "User_type")]
    pub user_type: String,
    #[serde(default, alias = "First_name")]
    pub first_name: String,
    #[serde(default, alias = "Last_name")]
    pub last_name: String,
    #[serde(default, alias = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

/// Identity to put into a freshly issued token
#[derive(Debug, Clone)]
pub struct TokenSubject<'a> {
    pub user_id: Uuid,
    pub user_type: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys.
    /// Call once at startup and store in `AppState`.
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        }
    }

    /// Mint a token; used by tests and local tooling
    pub fn issue(&self, subject: &TokenSubject<'_>) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            sub: subject.user_id.to_string(),
            user_type: subject.user_type.to_string(),
            first_name: subject.first_name.to_string(),
            last_name: subject.last_name.to_string(),
            email: None,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Validate a token and return claims
    #[inline]
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}
