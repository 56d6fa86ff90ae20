use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_user, register_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login_user))
}
