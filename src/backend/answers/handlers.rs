/**
 * Answer Handlers
 */
use super::types::{AnswerResponse, AnswersResponse, CreateAnswerRequest};
use crate::backend::authors::{attach_author, Authored};
use crate::backend::error::BackendError;
use crate::backend::realtime::Broadcaster;
use crate::backend::store::{NewAnswer, SharedStore, StoreError};
use crate::shared::{Event, EventType};
use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

/// POST /api/answers
pub async fn create_answer(
    State(store): State<SharedStore>,
    State(broadcaster): State<Broadcaster>,
    Json(request): Json<CreateAnswerRequest>,
) -> Result<Json<AnswerResponse>, BackendError> {
    let request = request.validate()?;
    let user_id = request.user_id;

    let answer = store
        .insert_answer(NewAnswer {
            question_id: request.question_id,
            user_id,
            answer: request.answer,
        })
        .await
        .map_err(|e| match e {
            StoreError::UnknownQuestion(_) => BackendError::not_found("Question not found"),
            other => other.into(),
        })?;
    let answer = attach_author(store.as_ref(), answer, user_id).await;
    tracing::info!(
        answer_id = %answer.record.answer_id,
        question_id = %answer.record.question_id,
        "Answer created"
    );

    broadcaster.broadcast(&Event::from_record(EventType::NewAnswer, &answer)?);

    Ok(Json(AnswerResponse {
        message: "Answer created".to_string(),
        answer,
    }))
}

/// GET /api/answers/{question_id}
pub async fn list_answers(
    State(store): State<SharedStore>,
    Path(question_id): Path<Uuid>,
) -> Result<Json<AnswersResponse>, BackendError> {
    let answers = store
        .list_answers(question_id)
        .await?
        .into_iter()
        .map(|(answer, username)| Authored::new(answer, username))
        .collect();

    Ok(Json(AnswersResponse { answers }))
}
