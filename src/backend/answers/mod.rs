//! Answers
//!
//! - `POST /api/answers` - create, broadcast `new_answer`
//! - `GET /api/answers/{question_id}` - list, oldest first

/// Request and response bodies
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_answer, list_answers};
