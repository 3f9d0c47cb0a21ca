//! WebSocket client helpers

use futures_util::StreamExt;
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub async fn connect(url: &str) -> WsClient {
    let (ws, _) = connect_async(url).await.expect("websocket connects");
    ws
}

/// Next text frame, skipping control frames
pub async fn next_text(ws: &mut WsClient) -> String {
    let read = async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => return text.as_str().to_string(),
                Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => continue,
                other => panic!("expected a text frame, got {:?}", other),
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), read)
        .await
        .expect("timed out waiting for a frame")
}

pub async fn next_json(ws: &mut WsClient) -> Value {
    serde_json::from_str(&next_text(ws).await).expect("frame is JSON")
}

/// Assert no text frame arrives within `wait`
pub async fn assert_no_frame(ws: &mut WsClient, wait: Duration) {
    if let Ok(Some(Ok(Message::Text(text)))) = tokio::time::timeout(wait, ws.next()).await {
        panic!("unexpected frame: {}", text.as_str());
    }
}

/// Wait for the server to end the stream
pub async fn expect_closed(ws: &mut WsClient) {
    let ended = async {
        loop {
            match ws.next().await {
                None | Some(Err(_)) | Some(Ok(Message::Close(_))) => return,
                Some(Ok(_)) => continue,
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), ended)
        .await
        .expect("server did not close the connection");
}
