use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Path, Request, rejection::JsonRejection, rejection::PathRejection},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use storefront_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

fn json_rejection_message(rejection: &JsonRejection) -> String {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    let body = rejection.body_text();
    if let Some(field) = body
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return format!("{} is required", field);
    }
    if body.contains("invalid type") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

/// JSON body extractor that also runs `validator` rules.
///
/// Both malformed JSON and rule violations are rejected with 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(anyhow!(json_rejection_message(&rejection)))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!(format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

/// Unwraps a UUID path segment, turning a parse failure into
/// `400 Invalid <resource> ID`.
pub fn path_id(
    path: Result<Path<Uuid>, PathRejection>,
    resource: &'static str,
) -> Result<Uuid, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::bad_request(anyhow!("Invalid {} ID", resource)))
}
