use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use storefront_core::{ErrorResponse, MessageResponse};

use crate::modules::auth::model::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::modules::health::controller::HealthResponse;
use crate::modules::products::model::{CreateProductDto, Product, UpdateProductDto};
use crate::modules::stores::model::{CreateStoreDto, Store, UpdateStoreDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::stores::controller::list_stores,
        crate::modules::stores::controller::get_store,
        crate::modules::stores::controller::get_my_store,
        crate::modules::stores::controller::create_store,
        crate::modules::stores::controller::update_store,
        crate::modules::stores::controller::delete_store,
        crate::modules::products::controller::list_store_products,
        crate::modules::products::controller::get_product,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::update_product,
        crate::modules::products::controller::delete_product,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            User,
            Store,
            CreateStoreDto,
            UpdateStoreDto,
            Product,
            CreateProductDto,
            UpdateProductDto,
            ErrorResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Stores", description = "Store management; one store per user"),
        (name = "Products", description = "Products listed under a store")
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Catalogue backend: users own a store and manage its products. Built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
