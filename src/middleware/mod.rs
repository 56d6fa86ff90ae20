//! Request extractors for authentication.
//!
//! Protected handlers take an [`auth::AuthUser`] parameter; extraction fails
//! with 401 unless the request carries `Authorization: Bearer <token>` with a
//! valid HS256 session token.
//!
//! Public handlers that behave differently for a store owner take
//! `Option<AuthUser>` instead, which never rejects.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_my_store(auth_user: AuthUser) -> impl IntoResponse {
//!     // auth_user.user_id is the verified caller
//! }
//! ```

pub mod auth;
