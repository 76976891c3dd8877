// src/utils/validation.rs

use axum::{Json, extract::rejection::JsonRejection};
use validator::Validate;

use crate::error::AppError;

/// Unwraps a JSON body and runs its schema validation.
///
/// Any failure, from a malformed body to a missing field or a wrong
/// type, becomes a 400 carrying the route's `message`. Details are
/// logged at debug level only.
pub fn validated<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected request body");
        AppError::BadRequest(message.to_string())
    })?;

    body.validate().map_err(|errors| {
        tracing::debug!(%errors, "request body failed validation");
        AppError::BadRequest(message.to_string())
    })?;

    Ok(body)
}
