// src/store/mongo.rs

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc, oid::ObjectId, to_document},
};

use super::QuestionStore;
use crate::{
    config::MongoSettings,
    error::{StorageError, StorageResult},
    models::question::{Question, QuestionRequest},
};

const QUESTIONS_COLLECTION: &str = "questions";

/// Used when neither `MONGO_DB_NAME` nor the URI names a database.
const FALLBACK_DATABASE: &str = "test";

/// Question store backed by a single shared MongoDB client.
/// No retry or reconnect logic is added on top of the driver's own pool
/// monitoring; a failed operation surfaces as a `StorageError`.
#[derive(Clone)]
pub struct MongoQuestionStore {
    collection: Collection<Document>,
}

impl MongoQuestionStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(QUESTIONS_COLLECTION),
        }
    }

    /// Opens the client and pings the database so the caller knows the
    /// connection is actually usable before declaring readiness.
    pub async fn connect(settings: &MongoSettings) -> StorageResult<Self> {
        let client = Client::with_uri_str(&settings.uri).await?;

        let database = match &settings.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(FALLBACK_DATABASE)),
        };

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::debug!(database = %database.name(), "MongoDB ping succeeded");

        Ok(Self::new(&database))
    }
}

fn parse_id(id: &str) -> StorageResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StorageError::InvalidId(id.to_string()))
}

#[async_trait]
impl QuestionStore for MongoQuestionStore {
    async fn list_questions(&self) -> StorageResult<Vec<Question>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Question::from).collect())
    }

    async fn create_question(&self, question: &QuestionRequest) -> StorageResult<String> {
        let document = to_document(&question.to_document())?;
        let result = self.collection.insert_one(document).await?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        Ok(id)
    }

    async fn update_question(&self, id: &str, question: &QuestionRequest) -> StorageResult<()> {
        let oid = parse_id(id)?;
        let fields = to_document(&question.to_document())?;

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": fields })
            .await?;

        if result.matched_count == 0 {
            tracing::debug!(%id, "update matched no question");
        }
        Ok(())
    }

    async fn delete_question(&self, id: &str) -> StorageResult<()> {
        let oid = parse_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            tracing::debug!(%id, "delete matched no question");
        }
        Ok(())
    }
}
