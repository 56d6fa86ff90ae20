use std::env;

/// Signing key used when `JWT_SECRET` is not configured. Development only.
pub const DEFAULT_JWT_SECRET: &str = "storefront-development-secret-change-me";

/// Tokens live for 24 hours unless `JWT_EXPIRY` says otherwise.
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 86_400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_SECRET")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            token_expiry: lookup("JWT_EXPIRY")
                .and_then(|s| s.parse().ok())
                .filter(|secs: &i64| *secs > 0)
                .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECS),
        }
    }

    /// True when tokens are signed with the built-in development key.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}
