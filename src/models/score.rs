// src/models/score.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a row of the 'studentscores' table.
/// Rows are append-only; `submitted_at` is set by the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub email: String,
    pub name: String,
    pub score: f64,
    pub submitted_at: DateTime<Utc>,
}

/// DTO for submitting a score.
/// `score` must be a JSON number; numeric strings such as "95" are rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitScoreRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub score: f64,
}
