// src/handlers/scores.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError, models::score::SubmitScoreRequest, store::ScoreStore,
    utils::validation::validated,
};

/// Records a student's score. `submitted_at` is stamped by the database.
pub async fn submit_score(
    State(scores): State<Arc<dyn ScoreStore>>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload, "Invalid data")?;

    scores
        .insert_score(&payload.email, &payload.name, payload.score)
        .await
        .map_err(|e| AppError::storage("Failed to save score", e))?;

    Ok(Json(json!({ "message": "Score submitted" })))
}

/// Lists all scores, newest submission first.
pub async fn list_scores(
    State(scores): State<Arc<dyn ScoreStore>>,
) -> Result<impl IntoResponse, AppError> {
    let records = scores.list_scores().await.map_err(AppError::Database)?;

    Ok(Json(records))
}
