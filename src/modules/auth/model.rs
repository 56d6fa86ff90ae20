//! Registration and login payloads.
//!
//! Re-exported from the `storefront-models` crate.

pub use storefront_models::auth::*;
pub use storefront_models::users::{User, UserRecord};
