//! Connection Registry
//!
//! The authoritative set of live connections. Every mutation and every
//! snapshot takes the same lock, and nothing awaits while holding it.

use super::connection::{Connection, ConnectionId};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Registry of open WebSocket connections
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: Mutex<HashMap<ConnectionId, Connection>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection whose upgrade has completed
    ///
    /// The connection is a broadcast target as soon as this returns.
    /// Returns the number of registered connections afterwards.
    pub fn register(&self, connection: Connection) -> usize {
        let mut connections = self.connections.lock();
        connections.insert(connection.id(), connection);
        connections.len()
    }

    /// Remove a connection; a no-op if it is already gone
    ///
    /// Returns `true` only for the call that actually removed it.
    pub fn unregister(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(&id).is_some()
    }

    /// Copy of the current connection set
    pub fn snapshot(&self) -> Vec<Connection> {
        self.connections.lock().values().cloned().collect()
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.lock().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.connections.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.lock().is_empty()
    }
}
