//! Question endpoints

use crate::common::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_question_with_author() {
    let server = TestServer::start().await;
    let user = server.register("carol", "carol@example.com", "secret1").await;
    let user_id = user["user"]["user_id"].as_str().unwrap();

    let response = server
        .post("/api/questions", &json!({"message": "  How?  ", "user_id": user_id}))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["message"], "Question created");
    assert_eq!(body["question"]["message"], "How?");
    assert_eq!(body["question"]["status"], "Pending");
    assert_eq!(body["question"]["user_id"], user_id);
    assert_eq!(body["question"]["username"], "carol");
    assert!(body["question"]["question_id"].is_string());
    assert!(body["question"]["created_at"].is_string());
}

#[tokio::test]
async fn test_unknown_author_is_anonymous() {
    let server = TestServer::start().await;
    let question = server
        .create_question("Who am I?", Some(&Uuid::new_v4().to_string()))
        .await;
    assert_eq!(question["username"], "Anonymous");
}

#[tokio::test]
async fn test_blank_question_rejected() {
    let server = TestServer::start().await;
    let response = server.post("/api/questions", &json!({"message": "   "})).await;
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "Question cannot be empty", "status": 422}));
}

#[tokio::test]
async fn test_list_puts_escalated_first_then_newest() {
    let server = TestServer::start().await;
    let first = server.create_question("first", None).await;
    server.create_question("second", None).await;
    server.create_question("third", None).await;

    let id = first["question_id"].as_str().unwrap();
    let response = server
        .put(&format!("/api/questions/{id}"), &json!({"status": "Escalated"}))
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = server.get("/api/questions").await.json().await.unwrap();
    let messages: Vec<&str> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["first", "third", "second"]);
    assert_eq!(body["questions"][0]["username"], "Anonymous");
}

#[tokio::test]
async fn test_update_unknown_question() {
    let server = TestServer::start().await;
    let response = server
        .put(&format!("/api/questions/{}", Uuid::new_v4()), &json!({"status": "Answered"}))
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Question not found");
}

#[tokio::test]
async fn test_update_invalid_status() {
    let server = TestServer::start().await;
    let question = server.create_question("q", None).await;
    let id = question["question_id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/questions/{id}"), &json!({"status": "Closed"}))
        .await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_answered_question_triggers_webhook() {
    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&hook)
        .await;

    let server = TestServer::with_config(test_config().webhook_url(format!("{}/hook", hook.uri()))).await;
    let question = server.create_question("Done yet?", None).await;
    let id = question["question_id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/questions/{id}"), &json!({"status": "Escalated"}))
        .await;
    assert_eq!(response.status(), 200);
    let response = server
        .put(&format!("/api/questions/{id}"), &json!({"status": "Answered"}))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Question updated");
    assert_eq!(body["question"]["status"], "Answered");

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    let requests = loop {
        let requests = hook.received_requests().await.unwrap_or_default();
        if !requests.is_empty() || tokio::time::Instant::now() > deadline {
            break requests;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    };

    assert_eq!(requests.len(), 1, "only the Answered update notifies");
    let payload: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(payload["event"], "question_answered");
    assert_eq!(payload["data"]["question_id"], id);
    assert_eq!(payload["data"]["username"], "Anonymous");
}

#[tokio::test]
async fn test_webhook_failure_does_not_fail_update() {
    let server = TestServer::with_config(test_config().webhook_url("http://127.0.0.1:1/hook")).await;
    let question = server.create_question("q", None).await;
    let id = question["question_id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/questions/{id}"), &json!({"status": "Answered"}))
        .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_suggest_answer() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "\n  Check the logs first.  "}]}}]
        })))
        .mount(&gemini)
        .await;

    let server = TestServer::with_config(
        test_config()
            .google_api_key("test-key")
            .gemini_api_base(gemini.uri()),
    )
    .await;
    let question = server.create_question("Server is down", None).await;
    let id = question["question_id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/questions/{id}/suggest"), &json!({}))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"suggestion": "Check the logs first."}));
}

#[tokio::test]
async fn test_suggest_unknown_question() {
    let server = TestServer::start().await;
    let response = server
        .post(&format!("/api/questions/{}/suggest", Uuid::new_v4()), &json!({}))
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_suggest_failure_is_500() {
    let server = TestServer::start().await;
    let question = server.create_question("q", None).await;
    let id = question["question_id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/questions/{id}/suggest"), &json!({}))
        .await;
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "Failed to generate suggestion", "status": 500}));
}
