//! A single live WebSocket endpoint as seen by the broadcaster.

use axum::extract::ws::Utf8Bytes;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::mpsc;

/// A serialized text frame, cheap to clone across connections
pub type Frame = Utf8Bytes;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique connection identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Allocate the next identifier
    pub fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// The writer side of a connection has gone away
#[derive(Debug, Error, PartialEq, Eq)]
#[error("connection {0} is closed")]
pub struct ConnectionClosed(pub ConnectionId);

/// Handle to one open WebSocket connection
///
/// Holds the sending half of the connection's outbound queue. The socket
/// writer task owns the receiving half and flushes frames in queue order,
/// so every frame sent through one handle arrives in the order it was sent.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    tx: mpsc::UnboundedSender<Frame>,
}

impl Connection {
    /// Create a handle plus the queue its writer task drains
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                id: ConnectionId::next(),
                tx,
            },
            rx,
        )
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queue a frame for delivery
    ///
    /// Fails only once the writer task has stopped.
    pub fn send(&self, frame: impl Into<Frame>) -> Result<(), ConnectionClosed> {
        self.tx.send(frame.into()).map_err(|_| ConnectionClosed(self.id))
    }
}
