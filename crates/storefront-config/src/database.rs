//! PostgreSQL connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 10)
//! - `DB_TIMEOUT_SECS`: deadline for acquiring a connection and for each
//!   statement (default: 10)

use std::env;
use std::time::Duration;

use crate::{ConfigError, parse_or};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            url,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            timeout: Duration::from_secs(parse_or(&lookup, "DB_TIMEOUT_SECS", 10)?),
        })
    }
}
