// src/models/question.rs

use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// A question as returned to clients.
/// The identifier keeps the document store's `_id` key.
///
/// Field values are passed through as stored, so documents written by
/// other clients (a numeric `correctOption`, for instance) still list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,

    /// The text of the question.
    pub question: Value,

    /// Ordered answer choices.
    pub options: Value,

    /// The correct choice: an option's text or its index.
    #[serde(rename = "correctOption")]
    pub correct_option: Value,
}

/// Converts a raw collection document. Missing fields become `null`.
impl From<Document> for Question {
    fn from(mut doc: Document) -> Self {
        let id = match doc.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(other) => match other.into_relaxed_extjson() {
                Value::String(s) => s,
                value => value.to_string(),
            },
            None => String::new(),
        };

        let mut field = |key: &str| {
            doc.remove(key)
                .map(Bson::into_relaxed_extjson)
                .unwrap_or(Value::Null)
        };

        Self {
            id,
            question: field("question"),
            options: field("options"),
            correct_option: field("correctOption"),
        }
    }
}

/// Fields written to the `questions` collection on insert and update.
/// `_id` is left for the store to assign.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDocument {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOption")]
    pub correct_option: Value,
}

/// Body for creating or fully replacing a question.
/// All three fields are written together; there is no partial patch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,

    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,

    /// Any truthy JSON value; `null`, `false`, `0` and `""` are rejected.
    #[serde(rename = "correctOption")]
    #[validate(custom(function = validate_correct_option))]
    pub correct_option: Value,
}

impl QuestionRequest {
    pub fn to_document(&self) -> QuestionDocument {
        QuestionDocument {
            question: self.question.clone(),
            options: self.options.clone(),
            correct_option: self.correct_option.clone(),
        }
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.is_empty() {
        return Err(validator::ValidationError::new("options_cannot_be_empty"));
    }
    Ok(())
}

fn validate_correct_option(value: &Value) -> Result<(), validator::ValidationError> {
    let falsy = match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };

    if falsy {
        return Err(validator::ValidationError::new("correct_option_required"));
    }
    Ok(())
}
