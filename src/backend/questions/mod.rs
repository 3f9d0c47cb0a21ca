//! Questions
//!
//! - `POST /api/questions` - create, broadcast `new_question`
//! - `GET /api/questions` - list, Escalated first then newest
//! - `PUT /api/questions/{id}` - change status, broadcast `question_updated`
//! - `POST /api/questions/{id}/suggest` - suggested answer

/// Request and response bodies
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_question, list_questions, suggest_answer, update_question};
