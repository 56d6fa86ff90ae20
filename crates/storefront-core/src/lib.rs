//! # Storefront Core
//!
//! Foundational types shared by every Storefront crate:
//!
//! - [`errors`]: the [`AppError`] type and its `{status, message}` HTTP rendering
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use storefront_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("correct horse battery staple")?;
//! assert!(verify_password("correct horse battery staple", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Store not found"));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse, MessageResponse};
pub use password::{hash_password, verify_password};
