use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_product, delete_product, get_product, list_store_products, update_product,
};

pub fn init_products_router() -> Router<AppState> {
    Router::new()
        // Shares the `{id}` segment name with the store routes
        .route(
            "/stores/{id}/products",
            get(list_store_products).post(create_product),
        )
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
