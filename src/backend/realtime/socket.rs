//! WebSocket endpoint
//!
//! Each upgraded socket is split into a writer task that drains the
//! connection's outbound queue and a reader loop that answers text frames
//! with a `pong` event. The reader loop owns the connection's lifetime: when
//! it ends, the connection is unregistered and the writer is stopped.

use super::connection::Connection;
use super::registry::ConnectionRegistry;
use crate::shared::Event;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::{fmt, sync::Arc, time::Duration};

/// Per-socket settings taken from configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SocketSettings {
    /// Close the socket when nothing arrives for this long
    pub idle_timeout: Option<Duration>,
}

/// Why a connection left the `OPEN` state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    ClientClosed,
    StreamEnded,
    BinaryFrame,
    ReceiveError,
    IdleTimeout,
    WriterStopped,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientClosed => "client closed",
            Self::StreamEnded => "stream ended",
            Self::BinaryFrame => "binary frame",
            Self::ReceiveError => "receive error",
            Self::IdleTimeout => "idle timeout",
            Self::WriterStopped => "writer stopped",
        }
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something the reader observed on an open socket
#[derive(Debug)]
pub(crate) enum Inbound {
    Frame(Message),
    Error(axum::Error),
    Ended,
    IdleTimeout,
}

/// What the reader loop does next
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    Reply(Event),
    Continue,
    Close(CloseReason),
}

/// Transition function of an `OPEN` connection
pub(crate) fn next_step(inbound: Inbound) -> Step {
    match inbound {
        Inbound::Frame(Message::Text(text)) => Step::Reply(Event::pong(text.as_str())),
        // answered by the transport
        Inbound::Frame(Message::Ping(_)) | Inbound::Frame(Message::Pong(_)) => Step::Continue,
        Inbound::Frame(Message::Binary(_)) => Step::Close(CloseReason::BinaryFrame),
        Inbound::Frame(Message::Close(_)) => Step::Close(CloseReason::ClientClosed),
        Inbound::Error(e) => {
            tracing::debug!("[Realtime] Receive error: {}", e);
            Step::Close(CloseReason::ReceiveError)
        }
        Inbound::Ended => Step::Close(CloseReason::StreamEnded),
        Inbound::IdleTimeout => Step::Close(CloseReason::IdleTimeout),
    }
}

/// Handle `GET /ws`
///
/// Only sockets whose upgrade completes are registered. A failed upgrade
/// is logged and has no other effect.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(registry): State<Arc<ConnectionRegistry>>,
    State(settings): State<SocketSettings>,
) -> Response {
    ws.on_failed_upgrade(|e| {
        tracing::warn!("[Realtime] WebSocket upgrade failed: {}", e);
    })
    .on_upgrade(move |socket| handle_socket(socket, registry, settings))
}

async fn handle_socket(socket: WebSocket, registry: Arc<ConnectionRegistry>, settings: SocketSettings) {
    let (mut sink, mut stream) = socket.split();
    let (connection, mut outbound) = Connection::new();
    let id = connection.id();

    let mut writer = tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            if let Err(e) = sink.send(Message::Text(frame)).await {
                tracing::debug!("[Realtime] Write failed on {}: {}", id, e);
                break;
            }
        }
    });

    let total = registry.register(connection.clone());
    tracing::info!(connection = %id, "[Realtime] Client connected ({} total)", total);

    let mut writer_finished = false;
    let reason = loop {
        let inbound = tokio::select! {
            inbound = read_inbound(&mut stream, settings.idle_timeout) => inbound,
            _ = &mut writer => {
                writer_finished = true;
                break CloseReason::WriterStopped;
            }
        };

        match next_step(inbound) {
            Step::Reply(event) => match event.to_frame() {
                Ok(text) => {
                    if connection.send(text).is_err() {
                        break CloseReason::WriterStopped;
                    }
                }
                Err(e) => tracing::error!("[Realtime] Failed to serialize pong: {:?}", e),
            },
            Step::Continue => {}
            Step::Close(reason) => break reason,
        }
    };

    registry.unregister(id);
    drop(connection);
    if !writer_finished {
        writer.abort();
    }

    tracing::info!(
        connection = %id,
        reason = %reason,
        "[Realtime] Client disconnected ({} remaining)",
        registry.len()
    );
}

async fn read_inbound<S>(stream: &mut S, idle_timeout: Option<Duration>) -> Inbound
where
    S: futures_util::Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let next = match idle_timeout {
        Some(limit) => match tokio::time::timeout(limit, stream.next()).await {
            Ok(next) => next,
            Err(_) => return Inbound::IdleTimeout,
        },
        None => stream.next().await,
    };

    match next {
        Some(Ok(message)) => Inbound::Frame(message),
        Some(Err(e)) => Inbound::Error(e),
        None => Inbound::Ended,
    }
}
