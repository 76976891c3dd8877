// src/routes.rs

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{health, questions, scores},
    state::AppState,
    utils::readiness::require_ready,
};

/// Assembles the application router.
///
/// * Question routes (document store) and score routes (relational store).
/// * The readiness gate wraps every route and the fallback.
/// * Trace and permissive CORS sit outside the gate, so preflight
///   requests are answered even before the document store connects.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_check))
        .route(
            "/api/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/api/questions/{id}",
            put(questions::update_question).delete(questions::delete_question),
        )
        .route("/api/submit", post(scores::submit_score))
        .route("/api/scores", get(scores::list_scores))
        .fallback(health::not_found)
        // Each layer wraps the ones above it
        .layer(middleware::from_fn_with_state(state.clone(), require_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
