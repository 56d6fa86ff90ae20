use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{HeaderMap, header, request::Parts},
};
use tracing::debug;
use uuid::Uuid;

use storefront_auth::parse_token;
use storefront_config::JwtConfig;
use storefront_core::AppError;

use crate::state::AppState;

/// Identity of the caller, taken from a verified session token.
///
/// The user record is not loaded: a token stays valid until it expires even
/// if the account behind it is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Returns the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(value: &str) -> Option<&str> {
    match value.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Some(token),
        _ => None,
    }
}

fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("Authorization header required"))?;

    let token = auth_header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(|| {
            AppError::unauthorized("Invalid authorization format, expected 'Bearer {token}'")
        })?;

    let claims = parse_token(token, jwt_config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::unauthorized("Invalid user ID in token"))?;

    Ok(AuthUser {
        user_id,
        username: claims.username,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.jwt_config)
    }
}

/// Public endpoints take `Option<AuthUser>`: a missing or unusable token
/// means an anonymous caller rather than a rejection.
impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if !parts.headers.contains_key(header::AUTHORIZATION) {
            return Ok(None);
        }

        match authenticate(&parts.headers, &state.jwt_config) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                debug!(reason = %err.message(), "Ignoring unusable token on public route");
                Ok(None)
            }
        }
    }
}
