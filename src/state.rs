// src/state.rs

use std::sync::{Arc, OnceLock};

use axum::extract::FromRef;

use crate::store::{QuestionStore, ScoreStore};

/// Set-once handle to the question store.
///
/// Starts empty; the startup task fills it after the document store
/// connection succeeds. Clones share the same cell.
#[derive(Clone, Default)]
pub struct Readiness {
    questions: Arc<OnceLock<Arc<dyn QuestionStore>>>,
}

impl Readiness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the connected store. Only the first call has any effect;
    /// returns whether this call performed the transition.
    pub fn mark_ready(&self, store: Arc<dyn QuestionStore>) -> bool {
        let transitioned = self.questions.set(store).is_ok();
        if transitioned {
            tracing::info!("Question store ready, accepting requests");
        } else {
            tracing::warn!("Question store was already marked ready; ignoring");
        }
        transitioned
    }

    pub fn is_ready(&self) -> bool {
        self.questions.get().is_some()
    }

    pub fn questions(&self) -> Option<Arc<dyn QuestionStore>> {
        self.questions.get().cloned()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub scores: Arc<dyn ScoreStore>,
    pub readiness: Readiness,
}

impl AppState {
    pub fn new(scores: Arc<dyn ScoreStore>, readiness: Readiness) -> Self {
        Self { scores, readiness }
    }
}

impl FromRef<AppState> for Arc<dyn ScoreStore> {
    fn from_ref(state: &AppState) -> Self {
        state.scores.clone()
    }
}

impl FromRef<AppState> for Readiness {
    fn from_ref(state: &AppState) -> Self {
        state.readiness.clone()
    }
}
