use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use storefront_config::CorsConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::init_auth_router;
use crate::modules::health::init_health_router;
use crate::modules::products::init_products_router;
use crate::modules::stores::init_stores_router;
use crate::state::AppState;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match &config.allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            layer
                .allow_origin(AllowOrigin::list(origins))
                .allow_credentials(true)
        }
        None => layer.allow_origin(Any),
    }
}

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(init_health_router())
        .merge(init_auth_router())
        .merge(init_stores_router())
        .merge(init_products_router())
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
