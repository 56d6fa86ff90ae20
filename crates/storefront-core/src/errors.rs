//! Application error type.
//!
//! Every handler returns `Result<_, AppError>`. An [`AppError`] pairs an HTTP
//! status with an [`anyhow::Error`] and renders as
//!
//! ```json
//! { "status": 404, "message": "Store not found" }
//! ```
//!
//! Server-side failures (5xx) never leak their cause to the client: the error
//! chain is logged and the body carries a generic message instead.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

/// Generic `{message}` acknowledgement, used by delete endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, Error::msg(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, Error::msg(message.into()))
    }

    /// The message sent to the client.
    pub fn message(&self) -> String {
        if self.status.is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        }

        let body = Json(ErrorResponse {
            status: self.status.as_u16(),
            message: self.message(),
        });

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_client_error_body_shape() {
        let (status, body) = render(AppError::not_found(anyhow!("Store not found"))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "Store not found");
    }

    #[tokio::test]
    async fn test_server_error_is_opaque() {
        let (status, body) = render(AppError::internal(anyhow!(
            "connection refused (os error 111)"
        )))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn test_from_foreign_error_is_internal() {
        let io = std::io::Error::other("disk on fire");
        let err: AppError = io.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(AppError::unauthorized("x").status, StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::forbidden("x").status, StatusCode::FORBIDDEN);
        assert_eq!(AppError::conflict(anyhow!("x")).status, StatusCode::CONFLICT);
        assert_eq!(
            AppError::bad_request(anyhow!("x")).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::forbidden("Not yours").message(), "Not yours");
    }
}
