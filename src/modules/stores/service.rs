use anyhow::anyhow;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use storefront_core::AppError;
use storefront_db::is_unique_violation;

use super::model::{CreateStoreDto, Store, UpdateStoreDto};

const STORE_COLUMNS: &str = "id, owner_id, name, description, logo, location, \
     contact_number, business_hours, tags, active, featured_product, created_at, updated_at";

const NOT_FOUND_OR_NOT_OWNED: &str = "Store not found or not owned by user";

fn already_has_store() -> AppError {
    AppError::conflict(anyhow!("User already has a store"))
}

pub struct StoreService;

impl StoreService {
    #[instrument(skip(db), fields(db.table = "stores", db.operation = "SELECT"))]
    pub async fn list_active(db: &PgPool) -> Result<Vec<Store>, AppError> {
        let stores = sqlx::query_as::<_, Store>(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE active = TRUE ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(stores)
    }

    #[instrument(skip(db), fields(db.table = "stores", db.operation = "SELECT"))]
    pub async fn get_store(db: &PgPool, store_id: Uuid) -> Result<Store, AppError> {
        Self::find_store(db, store_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Store not found")))
    }

    pub(crate) async fn find_store(db: &PgPool, store_id: Uuid) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE id = $1"
        ))
        .bind(store_id)
        .fetch_optional(db)
        .await?;

        if store.is_none() {
            debug!(%store_id, "Store not found");
        }

        Ok(store)
    }

    #[instrument(skip(db), fields(db.table = "stores", db.operation = "SELECT"))]
    pub async fn get_store_by_owner(db: &PgPool, owner_id: Uuid) -> Result<Store, AppError> {
        sqlx::query_as::<_, Store>(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE owner_id = $1"
        ))
        .bind(owner_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("No store found for this user")))
    }

    /// Fetches a store only if `owner_id` owns it.
    pub(crate) async fn get_owned_store(
        db: &PgPool,
        store_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Store, AppError> {
        sqlx::query_as::<_, Store>(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE id = $1 AND owner_id = $2"
        ))
        .bind(store_id)
        .bind(owner_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!(NOT_FOUND_OR_NOT_OWNED)))
    }

    /// Inserts the store and links it to its owner in one transaction.
    #[instrument(skip(db, dto), fields(db.table = "stores", db.operation = "INSERT"))]
    pub async fn create_store(
        db: &PgPool,
        owner_id: Uuid,
        dto: CreateStoreDto,
    ) -> Result<Store, AppError> {
        let mut tx = db.begin().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM stores WHERE owner_id = $1)",
        )
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await?;

        if exists {
            return Err(already_has_store());
        }

        let store = sqlx::query_as::<_, Store>(&format!(
            "INSERT INTO stores
                (owner_id, name, description, logo, location, contact_number, business_hours, tags, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE)
             RETURNING {STORE_COLUMNS}"
        ))
        .bind(owner_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.logo)
        .bind(&dto.location)
        .bind(&dto.contact_number)
        .bind(&dto.business_hours)
        .bind(&dto.tags)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return already_has_store();
            }
            AppError::from(e)
        })?;

        sqlx::query("UPDATE users SET store_id = $1, updated_at = NOW() WHERE id = $2")
            .bind(store.id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(store_id = %store.id, %owner_id, "Store created");
        Ok(store)
    }

    #[instrument(skip(db, dto), fields(db.table = "stores", db.operation = "UPDATE"))]
    pub async fn update_store(
        db: &PgPool,
        store_id: Uuid,
        owner_id: Uuid,
        dto: UpdateStoreDto,
    ) -> Result<Store, AppError> {
        let mut store = Self::get_owned_store(db, store_id, owner_id).await?;

        if let Some(product_id) = dto.featured_product {
            let belongs = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1 AND store_id = $2)",
            )
            .bind(product_id)
            .bind(store_id)
            .fetch_one(db)
            .await?;

            if !belongs {
                return Err(AppError::bad_request(anyhow!(
                    "Featured product must belong to this store"
                )));
            }
        }

        dto.apply_to(&mut store, Utc::now());

        let store = sqlx::query_as::<_, Store>(&format!(
            "UPDATE stores
             SET name = $1, description = $2, logo = $3, location = $4, contact_number = $5,
                 business_hours = $6, tags = $7, active = $8, featured_product = $9, updated_at = $10
             WHERE id = $11 AND owner_id = $12
             RETURNING {STORE_COLUMNS}"
        ))
        .bind(&store.name)
        .bind(&store.description)
        .bind(&store.logo)
        .bind(&store.location)
        .bind(&store.contact_number)
        .bind(&store.business_hours)
        .bind(&store.tags)
        .bind(store.active)
        .bind(store.featured_product)
        .bind(store.updated_at)
        .bind(store_id)
        .bind(owner_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!(NOT_FOUND_OR_NOT_OWNED)))?;

        info!(%store_id, "Store updated");
        Ok(store)
    }

    /// Removes the store, every product under it, and the owner's link to it.
    #[instrument(skip(db), fields(db.table = "stores", db.operation = "DELETE"))]
    pub async fn delete_store(db: &PgPool, store_id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        let deleted = sqlx::query("DELETE FROM stores WHERE id = $1 AND owner_id = $2")
            .bind(store_id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(NOT_FOUND_OR_NOT_OWNED)));
        }

        let products = sqlx::query("DELETE FROM products WHERE store_id = $1")
            .bind(store_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE users SET store_id = NULL, updated_at = NOW() WHERE id = $1 AND store_id = $2",
        )
        .bind(owner_id)
        .bind(store_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            %store_id,
            products_removed = products.rows_affected(),
            "Store deleted"
        );
        Ok(())
    }
}
