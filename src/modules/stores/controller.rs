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

use super::model::{CreateStoreDto, Store, UpdateStoreDto};
use super::service::StoreService;

#[utoipa::path(
    get,
    path = "/stores",
    responses(
        (status = 200, description = "Active stores, newest first", body = Vec<Store>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Stores"
)]
#[instrument(skip(state))]
pub async fn list_stores(State(state): State<AppState>) -> Result<Json<Vec<Store>>, AppError> {
    let stores = StoreService::list_active(&state.db).await?;
    Ok(Json(stores))
}

#[utoipa::path(
    get,
    path = "/stores/{id}",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store details", body = Store),
        (status = 400, description = "Invalid store ID", body = ErrorResponse),
        (status = 404, description = "Store not found", body = ErrorResponse)
    ),
    tag = "Stores"
)]
#[instrument(skip(state))]
pub async fn get_store(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Store>, AppError> {
    let id = path_id(id, "store")?;
    let store = StoreService::get_store(&state.db, id).await?;
    Ok(Json(store))
}

/// The caller's own store
#[utoipa::path(
    get,
    path = "/my-store",
    responses(
        (status = 200, description = "Store owned by the caller", body = Store),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No store found for this user", body = ErrorResponse)
    ),
    tag = "Stores",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_my_store(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Store>, AppError> {
    let store = StoreService::get_store_by_owner(&state.db, auth_user.user_id).await?;
    Ok(Json(store))
}

#[utoipa::path(
    post,
    path = "/stores",
    request_body = CreateStoreDto,
    responses(
        (status = 201, description = "Store created and linked to the caller", body = Store),
        (status = 400, description = "Malformed or invalid request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "User already has a store", body = ErrorResponse)
    ),
    tag = "Stores",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_store(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStoreDto>,
) -> Result<(StatusCode, Json<Store>), AppError> {
    let store = StoreService::create_store(&state.db, auth_user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// Partially update a store
///
/// Absent fields and empty strings leave the stored value unchanged.
#[utoipa::path(
    put,
    path = "/stores/{id}",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    request_body = UpdateStoreDto,
    responses(
        (status = 200, description = "Updated store", body = Store),
        (status = 400, description = "Invalid ID, body, or featured product", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Store not found or not owned by user", body = ErrorResponse)
    ),
    tag = "Stores",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_store(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(dto): ValidatedJson<UpdateStoreDto>,
) -> Result<Json<Store>, AppError> {
    let id = path_id(id, "store")?;
    let store = StoreService::update_store(&state.db, id, auth_user.user_id, dto).await?;
    Ok(Json(store))
}

/// Delete a store together with its products
#[utoipa::path(
    delete,
    path = "/stores/{id}",
    params(
        ("id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store deleted", body = MessageResponse),
        (status = 400, description = "Invalid store ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Store not found or not owned by user", body = ErrorResponse)
    ),
    tag = "Stores",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_store(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = path_id(id, "store")?;
    StoreService::delete_store(&state.db, id, auth_user.user_id).await?;
    Ok(Json(MessageResponse::new("Store deleted successfully")))
}
