//! Store data models and DTOs.
//!
//! This module re-exports store models from the `storefront-models` crate.

pub use storefront_models::stores::*;
