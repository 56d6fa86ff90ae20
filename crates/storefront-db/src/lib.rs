//! # Storefront DB
//!
//! PostgreSQL pool construction for the Storefront API.
//!
//! Each connection is opened with a server-side `statement_timeout` equal to
//! [`DatabaseConfig::timeout`], and the pool uses the same value as its
//! acquire timeout, so no database round trip can wait longer than that
//! deadline. A timed-out query comes back as an ordinary `sqlx::Error`.
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::DatabaseConfig;
//! use storefront_db::init_db_pool;
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = init_db_pool(&config).await?;
//! ```

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use storefront_config::DatabaseConfig;
use tracing::info;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.timeout)
}

fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(&config.url)?.options([(
        "statement_timeout",
        config.timeout.as_millis().to_string(),
    )]))
}

/// Opens the pool and verifies that at least one connection can be made.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(config)
        .connect_with(connect_options(config)?)
        .await?;

    info!(
        max_connections = config.max_connections,
        timeout_ms = config.timeout.as_millis() as u64,
        "Connected to PostgreSQL"
    );

    Ok(pool)
}

/// Builds the pool without connecting; connections open on first use.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    Ok(pool_options(config).connect_lazy_with(connect_options(config)?))
}

/// True when `err` is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
