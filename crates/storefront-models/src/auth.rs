use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::User;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "username must be 1 to 50 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

/// Login fields carry no rules: any mismatch, empty input included, is a 401.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned by both register and login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
