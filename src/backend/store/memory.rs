//! In-process table store.
//!
//! Tables are plain vectors in insertion order behind one `RwLock`. Used
//! when no database is configured and throughout the test suite.

use super::models::{Answer, NewAnswer, NewQuestion, NewUser, Question, QuestionStatus, User};
use super::{QaStore, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
}

impl Tables {
    fn username(&self, user_id: Option<Uuid>) -> Option<String> {
        let user_id = user_id?;
        self.users
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.username.clone())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QaStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_username(&self, user_id: Uuid) -> Result<Option<String>, StoreError> {
        Ok(self.tables.read().username(Some(user_id)))
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            user_id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let question = Question {
            question_id: Uuid::new_v4(),
            user_id: question.user_id,
            message: question.message,
            status: QuestionStatus::Pending.to_string(),
            created_at: Utc::now(),
        };
        self.tables.write().questions.push(question.clone());
        Ok(question)
    }

    async fn list_questions(&self) -> Result<Vec<(Question, Option<String>)>, StoreError> {
        let tables = self.tables.read();
        let mut rows: Vec<_> = tables
            .questions
            .iter()
            .rev()
            .map(|q| (q.clone(), tables.username(q.user_id)))
            .collect();
        // newest first; reverse insertion order breaks timestamp ties
        rows.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));
        Ok(rows)
    }

    async fn find_question(&self, question_id: Uuid) -> Result<Option<Question>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .questions
            .iter()
            .find(|q| q.question_id == question_id)
            .cloned())
    }

    async fn update_question_status(
        &self,
        question_id: Uuid,
        status: QuestionStatus,
    ) -> Result<Option<Question>, StoreError> {
        let mut tables = self.tables.write();
        Ok(tables
            .questions
            .iter_mut()
            .find(|q| q.question_id == question_id)
            .map(|q| {
                q.status = status.to_string();
                q.clone()
            }))
    }

    async fn insert_answer(&self, answer: NewAnswer) -> Result<Answer, StoreError> {
        let mut tables = self.tables.write();
        if !tables.questions.iter().any(|q| q.question_id == answer.question_id) {
            return Err(StoreError::UnknownQuestion(answer.question_id));
        }
        let answer = Answer {
            answer_id: Uuid::new_v4(),
            question_id: answer.question_id,
            user_id: answer.user_id,
            answer: answer.answer,
            created_at: Utc::now(),
        };
        tables.answers.push(answer.clone());
        Ok(answer)
    }

    async fn list_answers(&self, question_id: Uuid) -> Result<Vec<(Answer, Option<String>)>, StoreError> {
        let tables = self.tables.read();
        let mut rows: Vec<_> = tables
            .answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .map(|a| (a.clone(), tables.username(a.user_id)))
            .collect();
        rows.sort_by(|a, b| a.0.created_at.cmp(&b.0.created_at));
        Ok(rows)
    }
}
