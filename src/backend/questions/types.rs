//! Question request and response bodies.

use crate::backend::authors::Authored;
use crate::backend::store::{Question, QuestionStatus};
use crate::shared::SharedError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

impl CreateQuestionRequest {
    /// Trim the message and reject it if nothing is left
    pub fn validate(mut self) -> Result<Self, SharedError> {
        self.message = self.message.trim().to_string();
        if self.message.is_empty() {
            return Err(SharedError::validation("message", "Question cannot be empty"));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuestionRequest {
    pub status: String,
}

impl UpdateQuestionRequest {
    pub fn validate(&self) -> Result<QuestionStatus, SharedError> {
        self.status
            .parse()
            .map_err(|_| SharedError::validation("status", "Invalid status"))
    }
}

/// Body of create and update responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub message: String,
    pub question: Authored<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Authored<Question>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

/// Escalated questions first, then newest first
pub fn order_for_dashboard(questions: &mut [Authored<Question>]) {
    let escalated = |q: &Authored<Question>| q.record.status == QuestionStatus::Escalated.as_str();
    questions.sort_by(|a, b| {
        escalated(b)
            .cmp(&escalated(a))
            .then_with(|| b.record.created_at.cmp(&a.record.created_at))
    });
}
