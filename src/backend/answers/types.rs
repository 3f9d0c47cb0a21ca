//! Answer request and response bodies.

use crate::backend::authors::Authored;
use crate::backend::store::Answer;
use crate::shared::SharedError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnswerRequest {
    pub question_id: Uuid,
    pub answer: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

impl CreateAnswerRequest {
    pub fn validate(mut self) -> Result<Self, SharedError> {
        self.answer = self.answer.trim().to_string();
        if self.answer.is_empty() {
            return Err(SharedError::validation("answer", "Answer cannot be empty"));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub message: String,
    pub answer: Authored<Answer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswersResponse {
    pub answers: Vec<Authored<Answer>>,
}
