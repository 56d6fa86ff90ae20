use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_store, delete_store, get_my_store, get_store, list_stores, update_store,
};

pub fn init_stores_router() -> Router<AppState> {
    Router::new()
        .route("/stores", get(list_stores).post(create_store))
        .route(
            "/stores/{id}",
            get(get_store).put(update_store).delete(delete_store),
        )
        .route("/my-store", get(get_my_store))
}
