//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state extraction.
//! Every field is cheap to clone.

use crate::auth::JwtService;
use crate::cache::TherapyCache;
use crate::clients::HealthcareClient;
use crate::config::AppConfig;
use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// Therapies pushed by or pulled from healthcare
    pub therapies: TherapyCache,
    pub healthcare: HealthcareClient,
}

impl AppState {
    /// Create a new application state.
    /// Pre-computes JWT keys and builds the outbound HTTP client.
    pub fn new(db: PgPool, config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);
        let healthcare = HealthcareClient::new(
            &config.peers.healthcare_url,
            Duration::from_secs(config.peers.request_timeout_secs),
        )?;

        Ok(Self {
            db,
            config: Arc::new(config),
            jwt,
            therapies: TherapyCache::new(),
            healthcare,
        })
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
