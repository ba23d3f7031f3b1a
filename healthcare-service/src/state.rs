//! Shared application state

use crate::clients::{FoodClient, UniversityClient};
use crate::config::AppConfig;
use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub food: FoodClient,
    pub university: UniversityClient,
}

impl AppState {
    /// Builds both peer clients with the configured timeout
    pub fn new(db: PgPool, config: AppConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.peers.request_timeout_secs);
        let food = FoodClient::new(&config.peers.food_url, timeout)?;
        let university = UniversityClient::new(&config.peers.university_url, timeout)?;

        Ok(Self {
            db,
            config: Arc::new(config),
            food,
            university,
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
}
