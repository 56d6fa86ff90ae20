//! Product data models and DTOs.
//!
//! This module re-exports product models from the `storefront-models` crate.

pub use storefront_models::products::*;
