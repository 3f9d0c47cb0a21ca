/**
 * Real-time Event Broadcasting
 *
 * Fans an event out to every registered connection. The event is
 * serialized once and the same frame is queued on each connection.
 *
 * # Failure isolation
 *
 * A connection whose queue is closed does not stop the loop. It is
 * logged, collected, and removed from the registry after every other
 * connection has had its attempt. Producers never see these failures.
 */
use super::connection::{ConnectionId, Frame};
use super::registry::ConnectionRegistry;
use crate::shared::Event;
use std::sync::Arc;

/// Broadcast dispatcher bound to one registry
#[derive(Debug, Clone)]
pub struct Broadcaster {
    registry: Arc<ConnectionRegistry>,
}

impl Broadcaster {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }

    /// Broadcast an event to all connections
    ///
    /// # Returns
    ///
    /// Number of connections that accepted the frame (0 if none are open
    /// or the event could not be serialized)
    pub fn broadcast(&self, event: &Event) -> usize {
        let frame: Frame = match event.to_frame() {
            Ok(text) => text.into(),
            Err(e) => {
                tracing::error!("[Realtime] Failed to serialize {} event: {:?}", event.event_type, e);
                return 0;
            }
        };

        let connections = self.registry.snapshot();
        let mut delivered = 0;
        let mut failed: Vec<ConnectionId> = Vec::new();

        for connection in &connections {
            match connection.send(frame.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!("[Realtime] Send failed, dropping connection: {}", e);
                    failed.push(connection.id());
                }
            }
        }

        for id in &failed {
            self.registry.unregister(*id);
        }

        tracing::info!(
            event_type = %event.event_type,
            recipients = delivered,
            failures = failed.len(),
            "[Realtime] Event broadcast to {} connections",
            delivered
        );
        delivered
    }
}
