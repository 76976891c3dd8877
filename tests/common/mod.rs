// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use quiz_server::{
    error::{StorageError, StorageResult},
    models::{
        question::{Question, QuestionRequest},
        score::ScoreRecord,
    },
    routes,
    state::{AppState, Readiness},
    store::{QuestionStore, ScoreStore},
};
use serde_json::json;

/// In-memory stand-in for the question collection.
/// Ids follow the document store's format, so malformed ids fail the same way.
#[derive(Default)]
pub struct MemoryQuestionStore {
    questions: Mutex<Vec<Question>>,
}

fn parse_id(id: &str) -> StorageResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StorageError::InvalidId(id.to_string()))
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn list_questions(&self) -> StorageResult<Vec<Question>> {
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn create_question(&self, question: &QuestionRequest) -> StorageResult<String> {
        let id = ObjectId::new().to_hex();
        self.questions.lock().unwrap().push(Question {
            id: id.clone(),
            question: json!(question.question),
            options: json!(question.options),
            correct_option: question.correct_option.clone(),
        });
        Ok(id)
    }

    async fn update_question(&self, id: &str, question: &QuestionRequest) -> StorageResult<()> {
        let id = parse_id(id)?.to_hex();
        let mut questions = self.questions.lock().unwrap();
        if let Some(existing) = questions.iter_mut().find(|q| q.id == id) {
            existing.question = json!(question.question);
            existing.options = json!(question.options);
            existing.correct_option = question.correct_option.clone();
        }
        Ok(())
    }

    async fn delete_question(&self, id: &str) -> StorageResult<()> {
        let id = parse_id(id)?.to_hex();
        self.questions.lock().unwrap().retain(|q| q.id != id);
        Ok(())
    }
}

/// Question store whose every call fails.
pub struct BrokenQuestionStore;

fn unavailable() -> StorageError {
    // Handlers map every StorageError variant to the same 500 body.
    StorageError::InvalidId("collection unavailable".to_string())
}

#[async_trait]
impl QuestionStore for BrokenQuestionStore {
    async fn list_questions(&self) -> StorageResult<Vec<Question>> {
        Err(unavailable())
    }

    async fn create_question(&self, _question: &QuestionRequest) -> StorageResult<String> {
        Err(unavailable())
    }

    async fn update_question(&self, _id: &str, _question: &QuestionRequest) -> StorageResult<()> {
        Err(unavailable())
    }

    async fn delete_question(&self, _id: &str) -> StorageResult<()> {
        Err(unavailable())
    }
}

/// In-memory stand-in for the score table; newest record first.
#[derive(Default)]
pub struct MemoryScoreStore {
    records: Mutex<Vec<ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn insert_score(&self, email: &str, name: &str, score: f64) -> StorageResult<()> {
        self.records.lock().unwrap().insert(
            0,
            ScoreRecord {
                email: email.to_string(),
                name: name.to_string(),
                score,
                submitted_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn list_scores(&self) -> StorageResult<Vec<ScoreRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Score store whose every call fails like an exhausted pool.
pub struct BrokenScoreStore;

#[async_trait]
impl ScoreStore for BrokenScoreStore {
    async fn insert_score(&self, _email: &str, _name: &str, _score: f64) -> StorageResult<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list_scores(&self) -> StorageResult<Vec<ScoreRecord>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub struct TestApp {
    pub address: String,
    pub readiness: Readiness,
    pub questions: Arc<MemoryQuestionStore>,
}

impl TestApp {
    /// Opens the readiness gate with the in-memory question store.
    pub fn mark_ready(&self) {
        self.readiness.mark_ready(self.questions.clone());
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Spawns the app on a random port with the given score store.
/// The readiness gate starts closed.
pub async fn spawn_app_with(scores: Arc<dyn ScoreStore>) -> TestApp {
    let readiness = Readiness::new();
    let state = AppState::new(scores, readiness.clone());
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        readiness,
        questions: Arc::new(MemoryQuestionStore::default()),
    }
}

/// Spawns a ready app backed by in-memory stores.
pub async fn spawn_app() -> (TestApp, Arc<MemoryScoreStore>) {
    let scores = Arc::new(MemoryScoreStore::default());
    let app = spawn_app_with(scores.clone()).await;
    app.mark_ready();
    (app, scores)
}
