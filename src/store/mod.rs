//! Storage adapters.
//!
//! Questions live in a document store, scores in a relational table.
//! The two backends share nothing; handlers talk to them through these traits.

mod mongo;
mod mysql;

pub use mongo::MongoQuestionStore;
pub use mysql::MySqlScoreStore;

use async_trait::async_trait;

use crate::{
    error::StorageResult,
    models::{question::Question, question::QuestionRequest, score::ScoreRecord},
};

/// CRUD over the question collection.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, unfiltered and unpaginated.
    async fn list_questions(&self) -> StorageResult<Vec<Question>>;

    /// Inserts a question and returns the store-assigned id.
    async fn create_question(&self, question: &QuestionRequest) -> StorageResult<String>;

    /// Replaces all three fields of the matching question.
    /// An id that matches nothing is not an error.
    async fn update_question(&self, id: &str, question: &QuestionRequest) -> StorageResult<()>;

    /// Removes the matching question. An id that matches nothing is not an error.
    async fn delete_question(&self, id: &str) -> StorageResult<()>;
}

/// Append and ordered read over submitted scores.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn insert_score(&self, email: &str, name: &str, score: f64) -> StorageResult<()>;

    /// Every record, newest submission first.
    async fn list_scores(&self) -> StorageResult<Vec<ScoreRecord>>;
}
