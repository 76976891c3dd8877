// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Body returned while the document store connection is still pending.
pub const NOT_READY_MESSAGE: &str = "MongoDB not connected yet, please try again shortly.";

/// Failures raised by either storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("relational store error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("document store error: {0}")]
    Document(#[from] mongodb::error::Error),

    #[error("document encoding error: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    /// The identifier cannot be parsed into the document store's id format.
    #[error("invalid identifier '{0}'")]
    InvalidId(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Global Application Error Enum.
/// Centralizes the mapping from handler failures to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request, `{error}`
    BadRequest(String),

    // 500 Internal Server Error, `{error: message}`; the source is only logged
    Storage {
        message: &'static str,
        source: StorageError,
    },

    // 500 Internal Server Error, `{message: "Database error"}` (score listing)
    Database(StorageError),

    // 503 Service Unavailable until the document store is connected
    NotReady,

    // 404 for paths no route matches
    NotFound,
}

impl AppError {
    pub fn storage(message: &'static str, source: StorageError) -> Self {
        AppError::Storage { message, source }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            AppError::Storage { message, source } => write!(f, "{message}: {source}"),
            AppError::Database(source) => write!(f, "Database error: {source}"),
            AppError::NotReady => f.write_str(NOT_READY_MESSAGE),
            AppError::NotFound => f.write_str("not found"),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with the appropriate status code.
/// Storage details are logged here and never reach the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message }),
                )
            }
            AppError::Database(source) => {
                tracing::error!(error = %source, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Database error" }),
                )
            }
            AppError::NotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": NOT_READY_MESSAGE }),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "Not found" })),
        };

        (status, Json(body)).into_response()
    }
}

/// Errors that abort the process before or while it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("MongoDB connection error: {0}")]
    DocumentStore(#[source] StorageError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
