//! `/ws` endpoint tests: echo, fanout, ordering and connection lifecycle

use crate::common::*;
use futures_util::SinkExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tokio_tungstenite::tungstenite::Message;

#[tokio::test]
async fn test_ping_gets_exactly_one_pong() {
    let server = TestServer::start().await;
    let mut ws = connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;

    ws.send(Message::text("ping".to_string())).await.unwrap();

    assert_eq!(next_text(&mut ws).await, r#"{"type":"pong","data":"ping"}"#);
    assert_no_frame(&mut ws, Duration::from_millis(200)).await;
}

#[tokio::test]
async fn test_json_text_is_echoed_as_string() {
    let server = TestServer::start().await;
    let mut ws = connect(&server.ws_url()).await;

    ws.send(Message::text(r#"{"hello":1}"#.to_string())).await.unwrap();

    let frame = next_json(&mut ws).await;
    assert_eq!(frame, json!({"type": "pong", "data": "{\"hello\":1}"}));
}

#[tokio::test]
async fn test_three_connections_receive_new_question() {
    let server = TestServer::start().await;
    let mut clients = Vec::new();
    for _ in 0..3 {
        clients.push(connect(&server.ws_url()).await);
    }
    server.wait_for_connections(3).await;

    server.create_question("Hi", None).await;

    for ws in &mut clients {
        let frame = next_json(ws).await;
        assert_eq!(frame["type"], "new_question");
        assert_eq!(frame["data"]["message"], "Hi");
        assert_eq!(frame["data"]["username"], "Anonymous");
        assert_eq!(frame["data"]["status"], "Pending");
        assert_no_frame(ws, Duration::from_millis(100)).await;
    }
}

#[tokio::test]
async fn test_events_arrive_in_broadcast_order() {
    let server = TestServer::start().await;
    let mut ws = connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;

    let question = server.create_question("Order?", None).await;
    let id = question["question_id"].as_str().unwrap();
    let response = server
        .put(&format!("/api/questions/{id}"), &json!({"status": "Escalated"}))
        .await;
    assert_eq!(response.status(), 200);
    let response = server
        .post("/api/answers", &json!({"question_id": id, "answer": "Yes"}))
        .await;
    assert_eq!(response.status(), 200);

    let types: Vec<String> = {
        let mut types = Vec::new();
        for _ in 0..3 {
            types.push(next_json(&mut ws).await["type"].as_str().unwrap().to_string());
        }
        types
    };
    assert_eq!(types, vec!["new_question", "question_updated", "new_answer"]);
}

#[tokio::test]
async fn test_pong_and_broadcast_share_one_queue() {
    let server = TestServer::start().await;
    let mut ws = connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;

    ws.send(Message::text("first".to_string())).await.unwrap();
    assert_eq!(next_json(&mut ws).await["data"], "first");

    server.create_question("second", None).await;
    assert_eq!(next_json(&mut ws).await["data"]["message"], "second");
}

#[tokio::test]
async fn test_closed_client_is_unregistered_and_others_still_receive() {
    let server = TestServer::start().await;
    let mut leaving = connect(&server.ws_url()).await;
    let mut staying = connect(&server.ws_url()).await;
    server.wait_for_connections(2).await;

    leaving.close(None).await.unwrap();
    server.wait_for_connections(1).await;

    server.create_question("still here?", None).await;
    assert_eq!(next_json(&mut staying).await["data"]["message"], "still here?");
}

#[tokio::test]
async fn test_dropped_client_is_unregistered() {
    let server = TestServer::start().await;
    let ws = connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;

    drop(ws);
    server.wait_for_connections(0).await;
}

#[tokio::test]
async fn test_binary_frame_closes_connection() {
    let server = TestServer::start().await;
    let mut ws = connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;

    ws.send(Message::binary(vec![1u8, 2, 3])).await.unwrap();

    expect_closed(&mut ws).await;
    server.wait_for_connections(0).await;
}

#[tokio::test]
async fn test_idle_timeout_closes_quiet_connection() {
    let server = TestServer::with_config(test_config().ws_idle_timeout(Duration::from_secs(1))).await;
    let mut ws = connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;

    expect_closed(&mut ws).await;
    server.wait_for_connections(0).await;
}

#[tokio::test]
async fn test_no_idle_timeout_by_default() {
    let server = TestServer::start().await;
    let mut ws = connect(&server.ws_url()).await;
    server.wait_for_connections(1).await;

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(server.connection_count().await, 1);

    ws.send(Message::text("still open".to_string())).await.unwrap();
    assert_eq!(next_json(&mut ws).await["data"], "still open");
}

#[tokio::test]
async fn test_plain_get_is_not_registered() {
    let server = TestServer::start().await;

    let response = server.get("/ws").await;
    assert!(response.status().is_client_error());
    assert_eq!(server.connection_count().await, 0);
}

#[tokio::test]
async fn test_root_status() {
    let server = TestServer::start().await;
    let body: serde_json::Value = server.get("/").await.json().await.unwrap();
    assert_eq!(
        body,
        json!({"message": "Q&A Dashboard API", "status": "running", "connections": 0})
    );
}
