//! # Storefront Auth
//!
//! Bearer token handling for the Storefront API.
//!
//! - [`claims`]: the JWT claim set carried by every session token
//! - [`jwt`]: token issuance and verification
//!
//! Tokens are HS256-signed, name the user by id (`sub`) and username, and
//! expire [`JwtConfig::token_expiry`](storefront_config::JwtConfig) seconds
//! after issuance (24 hours by default).
//!
//! # Example
//!
//! ```ignore
//! use storefront_auth::{issue_token, parse_token};
//! use storefront_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(user_id, "ada", &config)?;
//! let claims = parse_token(&token, &config)?;
//! assert_eq!(claims.username, "ada");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{issue_token, parse_token};
