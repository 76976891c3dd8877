// src/handlers/health.rs

use axum::response::IntoResponse;

use crate::error::AppError;

pub const HEALTH_MESSAGE: &str = "✅ Quiz App Server is running";

/// Plain-text liveness string.
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

/// Fallback for paths no route matches.
pub async fn not_found() -> impl IntoResponse {
    AppError::NotFound
}
