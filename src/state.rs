use sqlx::PgPool;
use tracing::warn;

use storefront_config::{CorsConfig, JwtConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state(db: PgPool) -> AppState {
    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secret() {
        warn!("JWT_SECRET is not set; signing tokens with the insecure development default");
    }

    AppState {
        db,
        jwt_config,
        cors_config: CorsConfig::from_env(),
    }
}
