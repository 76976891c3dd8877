// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    models::question::QuestionRequest,
    utils::{readiness::Questions, validation::validated},
};

/// Lists every question in the collection.
pub async fn list_questions(Questions(store): Questions) -> Result<impl IntoResponse, AppError> {
    let questions = store
        .list_questions()
        .await
        .map_err(|e| AppError::storage("Failed to fetch questions", e))?;

    Ok(Json(questions))
}

/// Creates a question and returns its generated id.
pub async fn create_question(
    Questions(store): Questions,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload, "Invalid question data")?;

    let id = store
        .create_question(&payload)
        .await
        .map_err(|e| AppError::storage("Failed to add question", e))?;

    tracing::info!(%id, "Question added");

    Ok(Json(json!({ "message": "Question added", "id": id })))
}

/// Replaces a question's text, options and correct option.
///
/// An id that matches no document still answers 200.
/// A malformed id is a storage failure (500).
pub async fn update_question(
    Questions(store): Questions,
    Path(id): Path<String>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validated(payload, "Invalid update data")?;

    store
        .update_question(&id, &payload)
        .await
        .map_err(|e| AppError::storage("Failed to update question", e))?;

    Ok(Json(json!({ "message": "Question updated" })))
}

/// Deletes a question by id.
pub async fn delete_question(
    Questions(store): Questions,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    store
        .delete_question(&id)
        .await
        .map_err(|e| AppError::storage("Failed to delete question", e))?;

    Ok(Json(json!({ "message": "Question deleted" })))
}
