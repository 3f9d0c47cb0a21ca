//! Answer endpoints

use crate::common::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_list_answers() {
    let server = TestServer::start().await;
    let user = server.register("dave", "dave@example.com", "secret1").await;
    let user_id = user["user"]["user_id"].as_str().unwrap();
    let question = server.create_question("Why?", None).await;
    let id = question["question_id"].as_str().unwrap();

    let response = server
        .post("/api/answers", &json!({"question_id": id, "answer": " Because ", "user_id": user_id}))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Answer created");
    assert_eq!(body["answer"]["answer"], "Because");
    assert_eq!(body["answer"]["username"], "dave");
    assert_eq!(body["answer"]["question_id"], id);

    server
        .post("/api/answers", &json!({"question_id": id, "answer": "Also this"}))
        .await;

    let body: Value = server.get(&format!("/api/answers/{id}")).await.json().await.unwrap();
    let answers = body["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0]["answer"], "Because");
    assert_eq!(answers[0]["username"], "dave");
    assert_eq!(answers[1]["answer"], "Also this");
    assert_eq!(answers[1]["username"], "Anonymous");
}

#[tokio::test]
async fn test_answers_for_question_without_answers() {
    let server = TestServer::start().await;
    let body: Value = server
        .get(&format!("/api/answers/{}", Uuid::new_v4()))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"answers": []}));
}

#[tokio::test]
async fn test_blank_answer_rejected() {
    let server = TestServer::start().await;
    let question = server.create_question("q", None).await;

    let response = server
        .post(
            "/api/answers",
            &json!({"question_id": question["question_id"], "answer": "  "}),
        )
        .await;
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Answer cannot be empty");
}

#[tokio::test]
async fn test_answer_to_unknown_question() {
    let server = TestServer::start().await;
    let response = server
        .post("/api/answers", &json!({"question_id": Uuid::new_v4(), "answer": "lost"}))
        .await;
    assert_eq!(response.status(), 404);
}
