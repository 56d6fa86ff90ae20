//! # Storefront Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection and timeout settings
//! - [`jwt`]: JWT signing secret and token lifetime
//! - [`server`]: listen address
//!
//! Every type exposes `from_env()` plus a `from_lookup()` variant that takes
//! a key lookup function, so parsing can be exercised without touching the
//! process environment.
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let database_config = DatabaseConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads `key` through `lookup` and parses it, falling back to `default` when unset.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
