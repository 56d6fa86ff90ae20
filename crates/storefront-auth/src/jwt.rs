//! JWT issuance and verification.
//!
//! Only HS256 is accepted. A token fails verification when its signature does
//! not match the configured secret, when it was signed with another
//! algorithm, or when `exp` is in the past.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use storefront_config::JwtConfig;
use storefront_core::AppError;

use crate::claims::Claims;

/// Issues a session token for `user_id`.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(
    user_id: Uuid,
    username: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies `token` and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error for a bad signature, a non-HS256 algorithm,
/// an expired token, or a malformed token.
pub fn parse_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
