use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use storefront_core::{AppError, ErrorResponse, MessageResponse};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{ValidatedJson, path_id};

use super::model::{CreateProductDto, Product, UpdateProductDto};
use super::service::ProductService;

/// List a store's products
///
/// Anonymous callers and non-owners only see active products; the store
/// owner sees everything.
#[utoipa::path(
    get,
    path = "/stores/{id}/products",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Products, newest first", body = Vec<Product>),
        (status = 400, description = "Invalid store ID", body = ErrorResponse),
        (status = 404, description = "Store not found", body = ErrorResponse)
    ),
    tag = "Products",
    security((), ("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_store_products(
    State(state): State<AppState>,
    auth_user: Option<AuthUser>,
    store_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Product>>, AppError> {
    let store_id = path_id(store_id, "store")?;
    let caller = auth_user.map(|user| user.user_id);
    let products = ProductService::list_store_products(&state.db, store_id, caller).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Products",
    security((), ("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    auth_user: Option<AuthUser>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let id = path_id(id, "product")?;
    let caller = auth_user.map(|user| user.user_id);
    let product = ProductService::get_product(&state.db, id, caller).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/stores/{id}/products",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid ID or request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Store not found or not owned by user", body = ErrorResponse)
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    store_id: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let store_id = path_id(store_id, "store")?;
    let product =
        ProductService::create_product(&state.db, store_id, auth_user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Invalid ID or request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Caller does not own the product's store", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(dto): ValidatedJson<UpdateProductDto>,
) -> Result<Json<Product>, AppError> {
    let id = path_id(id, "product")?;
    let product = ProductService::update_product(&state.db, id, auth_user.user_id, dto).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Caller does not own the product's store", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = path_id(id, "product")?;
    ProductService::delete_product(&state.db, id, auth_user.user_id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
