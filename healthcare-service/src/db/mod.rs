//! Database pool, migrations and per-call deadlines

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Deadline for appointment writes and lookups
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Deadline for student, record and therapy calls
pub const LONG_TIMEOUT: Duration = Duration::from_secs(50);

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let connect_options =
        PgConnectOptions::from_str(database_url)?.application_name("healthcare-service");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(max_connections, "Database pool created");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await.map_err(|e| {
        warn!("Database health check failed: {}", e);
        e
    })?;
    Ok(())
}

/// Run a repository call under a deadline; expiry is an error, never a retry
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
        warn!(timeout_ms = limit.as_millis() as u64, "Database call timed out");
        Err(anyhow::anyhow!("database call exceeded {:?}", limit))
    })
}
