//! Store domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::overwrite_if_present;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub location: String,
    pub contact_number: String,
    pub business_hours: String,
    pub tags: Vec<String>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_product: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// True when `product_id` is this store's featured product.
    pub fn features(&self, product_id: Uuid) -> bool {
        self.featured_product == Some(product_id)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "whatsappNumber")]
    pub contact_number: String,
    #[serde(default)]
    pub business_hours: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial store update.
///
/// `tags`, `active` and `featuredProduct` overwrite whenever present (an
/// empty `tags` array clears the tags). String fields overwrite only when
/// non-empty.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreDto {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "whatsappNumber")]
    pub contact_number: Option<String>,
    pub business_hours: Option<String>,
    pub tags: Option<Vec<String>>,
    pub active: Option<bool>,
    /// Must name a product belonging to this store
    pub featured_product: Option<Uuid>,
}

impl UpdateStoreDto {
    pub fn apply_to(self, store: &mut Store, now: DateTime<Utc>) {
        overwrite_if_present(&mut store.name, self.name);
        overwrite_if_present(&mut store.description, self.description);
        overwrite_if_present(&mut store.logo, self.logo);
        overwrite_if_present(&mut store.location, self.location);
        overwrite_if_present(&mut store.contact_number, self.contact_number);
        overwrite_if_present(&mut store.business_hours, self.business_hours);

        if let Some(tags) = self.tags {
            store.tags = tags;
        }
        if let Some(active) = self.active {
            store.active = active;
        }
        if let Some(product_id) = self.featured_product {
            store.featured_product = Some(product_id);
        }

        store.updated_at = now;
    }
}
