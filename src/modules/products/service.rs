use anyhow::anyhow;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use storefront_core::AppError;

use crate::modules::stores::service::StoreService;

use super::model::{CreateProductDto, Product, UpdateProductDto};

const PRODUCT_COLUMNS: &str = "id, store_id, name, description, price, image, category, stock, \
     featured, active, created_at, updated_at";

fn product_not_found() -> AppError {
    AppError::not_found(anyhow!("Product not found"))
}

pub struct ProductService;

impl ProductService {
    /// Lists a store's products, newest first. Inactive products are only
    /// included when `caller` owns the store.
    #[instrument(skip(db), fields(db.table = "products", db.operation = "SELECT"))]
    pub async fn list_store_products(
        db: &PgPool,
        store_id: Uuid,
        caller: Option<Uuid>,
    ) -> Result<Vec<Product>, AppError> {
        let store = StoreService::get_store(db, store_id).await?;
        let include_inactive = caller.is_some_and(|user_id| store.is_owned_by(user_id));

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE store_id = $1 AND (active = TRUE OR $2)
             ORDER BY created_at DESC"
        ))
        .bind(store_id)
        .bind(include_inactive)
        .fetch_all(db)
        .await?;

        Ok(products)
    }

    #[instrument(skip(db), fields(db.table = "products", db.operation = "SELECT"))]
    pub async fn get_product(
        db: &PgPool,
        product_id: Uuid,
        caller: Option<Uuid>,
    ) -> Result<Product, AppError> {
        let product = Self::find_product(db, product_id).await?;

        if !product.active {
            let visible = match StoreService::find_store(db, product.store_id).await? {
                Some(store) => product.is_visible_to(store.owner_id, caller),
                None => false,
            };
            if !visible {
                debug!(%product_id, "Hiding inactive product");
                return Err(product_not_found());
            }
        }

        Ok(product)
    }

    async fn find_product(db: &PgPool, product_id: Uuid) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(product_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(product_not_found)
    }

    /// Loads a product for mutation, failing with 403 unless `caller` owns
    /// the store it belongs to.
    async fn find_owned_product(
        db: &PgPool,
        product_id: Uuid,
        caller: Uuid,
        action: &str,
    ) -> Result<Product, AppError> {
        let product = Self::find_product(db, product_id).await?;

        let owns_store = StoreService::find_store(db, product.store_id)
            .await?
            .is_some_and(|store| store.is_owned_by(caller));

        if !owns_store {
            warn!(%product_id, user_id = %caller, "Product ownership check failed");
            return Err(AppError::forbidden(format!(
                "Not authorized to {action} this product"
            )));
        }

        Ok(product)
    }

    #[instrument(skip(db, dto), fields(db.table = "products", db.operation = "INSERT"))]
    pub async fn create_product(
        db: &PgPool,
        store_id: Uuid,
        owner_id: Uuid,
        dto: CreateProductDto,
    ) -> Result<Product, AppError> {
        StoreService::get_owned_store(db, store_id, owner_id).await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products
                (store_id, name, description, price, image, category, stock, featured, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(store_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.image)
        .bind(&dto.category)
        .bind(dto.stock)
        .bind(dto.featured)
        .bind(dto.is_active())
        .fetch_one(db)
        .await?;

        info!(product_id = %product.id, %store_id, "Product created");
        Ok(product)
    }

    #[instrument(skip(db, dto), fields(db.table = "products", db.operation = "UPDATE"))]
    pub async fn update_product(
        db: &PgPool,
        product_id: Uuid,
        caller: Uuid,
        dto: UpdateProductDto,
    ) -> Result<Product, AppError> {
        let mut product = Self::find_owned_product(db, product_id, caller, "update").await?;

        dto.apply_to(&mut product, Utc::now());

        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products
             SET name = $1, description = $2, price = $3, image = $4, category = $5,
                 stock = $6, featured = $7, active = $8, updated_at = $9
             WHERE id = $10
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image)
        .bind(&product.category)
        .bind(product.stock)
        .bind(product.featured)
        .bind(product.active)
        .bind(product.updated_at)
        .bind(product_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(product_not_found)?;

        info!(%product_id, "Product updated");
        Ok(product)
    }

    /// Deletes the product and clears its store's featured reference if it
    /// pointed here, in one transaction.
    #[instrument(skip(db), fields(db.table = "products", db.operation = "DELETE"))]
    pub async fn delete_product(db: &PgPool, product_id: Uuid, caller: Uuid) -> Result<(), AppError> {
        let product = Self::find_owned_product(db, product_id, caller, "delete").await?;

        let mut tx = db.begin().await?;

        let deleted = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(product_not_found());
        }

        let unfeatured = sqlx::query(
            "UPDATE stores SET featured_product = NULL, updated_at = NOW()
             WHERE id = $1 AND featured_product = $2",
        )
        .bind(product.store_id)
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            %product_id,
            store_id = %product.store_id,
            cleared_featured = unfeatured.rows_affected() > 0,
            "Product deleted"
        );
        Ok(())
    }
}
