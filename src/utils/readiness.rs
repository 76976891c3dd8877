// src/utils/readiness.rs

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRef, FromRequestParts, State},
    http::{Request, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::Readiness, store::QuestionStore};

/// Axum Middleware: Readiness Gate.
///
/// Rejects every request with 503 until the question store has connected,
/// whatever the path. Score routes are gated too.
pub async fn require_ready(
    State(readiness): State<Readiness>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !readiness.is_ready() {
        tracing::debug!(path = %req.uri().path(), "rejecting request before readiness");
        return Err(AppError::NotReady);
    }

    Ok(next.run(req).await)
}

/// Extractor yielding the connected question store.
pub struct Questions(pub Arc<dyn QuestionStore>);

impl<S> FromRequestParts<S> for Questions
where
    Readiness: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Readiness::from_ref(state)
            .questions()
            .map(Questions)
            .ok_or(AppError::NotReady)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::StorageResult,
        models::question::{Question, QuestionRequest},
    };
    use async_trait::async_trait;
    use axum::{Router, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    struct EmptyStore;

    #[async_trait]
    impl QuestionStore for EmptyStore {
        async fn list_questions(&self) -> StorageResult<Vec<Question>> {
            Ok(Vec::new())
        }
        async fn create_question(&self, _question: &QuestionRequest) -> StorageResult<String> {
            Ok("0".repeat(24))
        }
        async fn update_question(&self, _id: &str, _question: &QuestionRequest) -> StorageResult<()> {
            Ok(())
        }
        async fn delete_question(&self, _id: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    fn gated(readiness: &Readiness) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(readiness.clone(), require_ready))
    }

    async fn status_of(app: Router) -> StatusCode {
        let req = Request::builder().uri("/ping").body(Body::empty()).unwrap();
        app.oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn gate_opens_after_mark_ready() {
        let readiness = Readiness::new();
        assert_eq!(status_of(gated(&readiness)).await, StatusCode::SERVICE_UNAVAILABLE);

        assert!(readiness.mark_ready(Arc::new(EmptyStore)));
        assert_eq!(status_of(gated(&readiness)).await, StatusCode::OK);
    }

    #[test]
    fn transition_happens_once() {
        let readiness = Readiness::new();
        let observer = readiness.clone();
        assert!(!observer.is_ready());

        assert!(readiness.mark_ready(Arc::new(EmptyStore)));
        assert!(!readiness.mark_ready(Arc::new(EmptyStore)));
        assert!(observer.is_ready());
        assert!(observer.questions().is_some());
    }
}
