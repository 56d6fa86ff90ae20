use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use storefront_auth::issue_token;
use storefront_config::JwtConfig;
use storefront_core::{AppError, hash_password, verify_password};
use storefront_db::is_unique_violation;
use storefront_models::users::DEFAULT_ROLE;

use super::model::{AuthResponse, LoginRequest, RegisterRequest, User, UserRecord};

const USER_COLUMNS: &str =
    "id, username, password_hash, email, role, store_id, created_at, updated_at";

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService;

impl AuthService {
    #[instrument(
        skip(db, dto, jwt_config),
        fields(username = %dto.username, db.table = "users", db.operation = "INSERT")
    )]
    pub async fn register(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(&dto.username)
        .fetch_one(db)
        .await?;

        if taken {
            return Err(AppError::conflict(anyhow!("Username already exists")));
        }

        let password_hash = hash_password(&dto.password)?;

        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "INSERT INTO users (username, password_hash, email, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.username)
        .bind(&password_hash)
        .bind(&dto.email)
        .bind(DEFAULT_ROLE)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::conflict(anyhow!("Username already exists"));
            }
            AppError::from(e)
        })?;

        let token = issue_token(record.id, &record.username, jwt_config)?;
        info!(user_id = %record.id, "User registered");

        Ok(AuthResponse {
            token,
            user: User::from(record),
        })
    }

    #[instrument(
        skip(db, dto, jwt_config),
        fields(username = %dto.username, db.table = "users", db.operation = "SELECT")
    )]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(&dto.username)
        .fetch_optional(db)
        .await?;

        let Some(record) = record else {
            warn!("Login attempt for unknown username");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&dto.password, &record.password_hash)? {
            warn!(user_id = %record.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = issue_token(record.id, &record.username, jwt_config)?;
        info!(user_id = %record.id, "User logged in");

        Ok(AuthResponse {
            token,
            user: User::from(record),
        })
    }
}
