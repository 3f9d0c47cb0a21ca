/**
 * API Routes
 *
 * ## Authentication
 * - `POST /api/register`
 * - `POST /api/login`
 *
 * ## Questions
 * - `POST /api/questions`, `GET /api/questions`
 * - `PUT /api/questions/{question_id}`
 * - `POST /api/questions/{question_id}/suggest`
 *
 * ## Answers
 * - `POST /api/answers`
 * - `GET /api/answers/{question_id}`
 */
use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::answers::{create_answer, list_answers};
use crate::backend::auth::{login, register};
use crate::backend::questions::{create_question, list_questions, suggest_answer, update_question};
use crate::backend::server::state::AppState;

pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/questions", post(create_question).get(list_questions))
        .route("/api/questions/{question_id}", put(update_question))
        .route("/api/questions/{question_id}/suggest", post(suggest_answer))
        .route("/api/answers", post(create_answer))
        .route("/api/answers/{question_id}", get(list_answers))
}
