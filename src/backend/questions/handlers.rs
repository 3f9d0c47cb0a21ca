/**
 * Question Handlers
 *
 * Writes go to the store first; only a successful write produces an event.
 * Every question leaving these handlers carries its author's username.
 */
use super::types::{
    order_for_dashboard, CreateQuestionRequest, QuestionResponse, QuestionsResponse, SuggestionResponse,
    UpdateQuestionRequest,
};
use crate::backend::authors::{attach_author, Authored};
use crate::backend::error::BackendError;
use crate::backend::integrations::{SuggestionClient, WebhookNotifier, QUESTION_ANSWERED};
use crate::backend::realtime::Broadcaster;
use crate::backend::store::{NewQuestion, QuestionStatus, SharedStore};
use crate::shared::{Event, EventType};
use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

const SUGGESTION_FAILED: &str = "Failed to generate suggestion";

/// POST /api/questions
pub async fn create_question(
    State(store): State<SharedStore>,
    State(broadcaster): State<Broadcaster>,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<Json<QuestionResponse>, BackendError> {
    let request = request.validate()?;
    let user_id = request.user_id;

    let question = store
        .insert_question(NewQuestion {
            user_id,
            message: request.message,
        })
        .await?;
    let question = attach_author(store.as_ref(), question, user_id).await;
    tracing::info!(question_id = %question.record.question_id, "Question created");

    broadcaster.broadcast(&Event::from_record(EventType::NewQuestion, &question)?);

    Ok(Json(QuestionResponse {
        message: "Question created".to_string(),
        question,
    }))
}

/// GET /api/questions
pub async fn list_questions(State(store): State<SharedStore>) -> Result<Json<QuestionsResponse>, BackendError> {
    let mut questions: Vec<_> = store
        .list_questions()
        .await?
        .into_iter()
        .map(|(question, username)| Authored::new(question, username))
        .collect();
    order_for_dashboard(&mut questions);

    Ok(Json(QuestionsResponse { questions }))
}

/// PUT /api/questions/{question_id}
///
/// Marking a question `Answered` also sends a `question_answered` webhook.
pub async fn update_question(
    State(store): State<SharedStore>,
    State(broadcaster): State<Broadcaster>,
    State(webhook): State<WebhookNotifier>,
    Path(question_id): Path<Uuid>,
    Json(request): Json<UpdateQuestionRequest>,
) -> Result<Json<QuestionResponse>, BackendError> {
    let status = request.validate()?;

    let question = store
        .update_question_status(question_id, status)
        .await?
        .ok_or_else(|| BackendError::not_found("Question not found"))?;
    let user_id = question.user_id;
    let question = attach_author(store.as_ref(), question, user_id).await;
    tracing::info!(%question_id, %status, "Question updated");

    broadcaster.broadcast(&Event::from_record(EventType::QuestionUpdated, &question)?);

    if status == QuestionStatus::Answered {
        webhook.spawn_notify(QUESTION_ANSWERED, question.clone());
    }

    Ok(Json(QuestionResponse {
        message: "Question updated".to_string(),
        question,
    }))
}

/// POST /api/questions/{question_id}/suggest
pub async fn suggest_answer(
    State(store): State<SharedStore>,
    State(suggestions): State<SuggestionClient>,
    Path(question_id): Path<Uuid>,
) -> Result<Json<SuggestionResponse>, BackendError> {
    let question = store
        .find_question(question_id)
        .await
        .map_err(|e| {
            tracing::error!("Error generating suggestion: {}", e);
            BackendError::internal(SUGGESTION_FAILED)
        })?
        .ok_or_else(|| BackendError::not_found("Question not found"))?;

    let suggestion = suggestions.suggest(&question.message).await.map_err(|e| {
        tracing::error!("Error generating suggestion: {}", e);
        BackendError::internal(SUGGESTION_FAILED)
    })?;

    Ok(Json(SuggestionResponse { suggestion }))
}
