//! # Storefront Models
//!
//! Domain models and DTOs for the Storefront API.
//!
//! # Modules
//!
//! - [`auth`]: registration, login and token response bodies
//! - [`products`]: catalogue items and their create/update payloads
//! - [`stores`]: merchant stores and their create/update payloads
//! - [`users`]: account records
//!
//! Entities serialize with camelCase keys. Update payloads are patches: a
//! field that is absent (or, for strings, empty) leaves the stored value
//! untouched.
//!
//! # Example
//!
//! ```ignore
//! use storefront_models::products::{Product, UpdateProductDto};
//!
//! let patch = UpdateProductDto { price: Some(12.5), ..Default::default() };
//! patch.apply_to(&mut product, chrono::Utc::now());
//! ```

pub mod auth;
pub mod products;
pub mod stores;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use products::{CreateProductDto, Product, UpdateProductDto};
pub use stores::{CreateStoreDto, Store, UpdateStoreDto};
pub use users::{User, UserRecord};

/// Replaces `field` with `value` when it is present and non-empty.
///
/// Empty strings are treated like an absent field, so a string can never be
/// cleared through an update.
pub(crate) fn overwrite_if_present(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = value;
    }
}
