//! Product domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::overwrite_if_present;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub stock: i32,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Inactive products are only visible to the owner of their store.
    pub fn is_visible_to(&self, store_owner_id: Uuid, caller: Option<Uuid>) -> bool {
        self.active || caller == Some(store_owner_id)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 200, message = "name must be 1 to 200 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
    /// Defaults to `true`
    pub active: Option<bool>,
}

impl CreateProductDto {
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

/// Partial product update. The owning store cannot be changed.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: Option<i32>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}

impl UpdateProductDto {
    pub fn apply_to(self, product: &mut Product, now: DateTime<Utc>) {
        overwrite_if_present(&mut product.name, self.name);
        overwrite_if_present(&mut product.description, self.description);
        overwrite_if_present(&mut product.image, self.image);
        overwrite_if_present(&mut product.category, self.category);

        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
        if let Some(active) = self.active {
            product.active = active;
        }

        product.updated_at = now;
    }
}
