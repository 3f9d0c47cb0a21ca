//! Persistence Module
//!
//! The [`QaStore`] trait is the only way handlers touch the `users`,
//! `questions` and `answers` tables. Two implementations exist:
//!
//! - [`PgStore`] - PostgreSQL through `sqlx`, used when `DATABASE_URL` is set
//! - [`MemoryStore`] - in-process tables for development and tests
//!
//! Listing operations return each record paired with the username of its
//! author when the author is known. Falling back to `"Anonymous"` is left to
//! the caller.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Stored record types
pub mod models;

/// PostgreSQL store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use models::{Answer, NewAnswer, NewQuestion, NewUser, Question, QuestionStatus, User};
pub use postgres::PgStore;

/// Store handle shared through application state
pub type SharedStore = std::sync::Arc<dyn QaStore>;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Question {0} does not exist")]
    UnknownQuestion(Uuid),
}

/// Table store used by the request handlers
#[async_trait]
pub trait QaStore: Send + Sync + 'static {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Username of a user, `None` if no such user exists
    async fn find_username(&self, user_id: Uuid) -> Result<Option<String>, StoreError>;

    /// Insert a user; fails with [`StoreError::DuplicateEmail`] if the email is taken
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Insert a question with status `Pending` and the current time
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// All questions, newest first, with the author's username when known
    async fn list_questions(&self) -> Result<Vec<(Question, Option<String>)>, StoreError>;

    async fn find_question(&self, question_id: Uuid) -> Result<Option<Question>, StoreError>;

    /// Set a question's status; `None` when no question matched
    async fn update_question_status(
        &self,
        question_id: Uuid,
        status: QuestionStatus,
    ) -> Result<Option<Question>, StoreError>;

    /// Insert an answer; the question must exist
    async fn insert_answer(&self, answer: NewAnswer) -> Result<Answer, StoreError>;

    /// Answers to one question, oldest first, with the author's username when known
    async fn list_answers(&self, question_id: Uuid) -> Result<Vec<(Answer, Option<String>)>, StoreError>;
}
