/**
 * Stored Records
 *
 * Rows of the `users`, `questions` and `answers` tables, plus the insert
 * payloads the handlers build. Records serialize with their column names,
 * which is also the shape pushed to dashboard clients.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    /// bcrypt hash, never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Question posted to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub question_id: Uuid,
    pub user_id: Option<Uuid>,
    pub message: String,
    /// One of `Pending`, `Escalated`, `Answered`
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Answer to a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Answer {
    pub answer_id: Uuid,
    pub question_id: Uuid,
    pub user_id: Option<Uuid>,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionStatus {
    Pending,
    Escalated,
    Answered,
}

impl QuestionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Escalated => "Escalated",
            Self::Answered => "Answered",
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Escalated" => Ok(Self::Escalated),
            "Answered" => Ok(Self::Answered),
            other => Err(format!("Invalid status: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub user_id: Option<Uuid>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: Uuid,
    pub user_id: Option<Uuid>,
    pub answer: String,
}
