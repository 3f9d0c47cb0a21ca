//! Real-time Update Module
//!
//! Live connection management and broadcast fanout for dashboard clients.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── connection.rs   - Connection handle and identifier
//! ├── registry.rs     - Set of live connections
//! ├── broadcast.rs    - Event fanout with failure isolation
//! └── socket.rs       - `/ws` upgrade, reader loop and writer task
//! ```
//!
//! # Data Flow
//!
//! A socket upgrades and is registered. A handler persists a record and
//! calls [`Broadcaster::broadcast`], which snapshots the registry and queues
//! one serialized frame per connection. Connections whose queue is closed
//! are unregistered after the loop.
//!
//! # Example
//!
//! ```rust
//! use qa_dashboard::backend::realtime::{Broadcaster, Connection, ConnectionRegistry};
//! use qa_dashboard::shared::Event;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ConnectionRegistry::new());
//! let broadcaster = Broadcaster::new(Arc::clone(&registry));
//!
//! let (connection, mut outbound) = Connection::new();
//! registry.register(connection);
//!
//! let delivered = broadcaster.broadcast(&Event::pong("hello"));
//! assert_eq!(delivered, 1);
//! assert_eq!(outbound.try_recv().unwrap().as_str(), r#"{"type":"pong","data":"hello"}"#);
//! ```

/// Connection handle and identifier
pub mod connection;

/// Registry of live connections
pub mod registry;

/// Event broadcasting
pub mod broadcast;

/// WebSocket endpoint
pub mod socket;

pub use broadcast::Broadcaster;
pub use connection::{Connection, ConnectionClosed, ConnectionId, Frame};
pub use registry::ConnectionRegistry;
pub use socket::{ws_handler, CloseReason, SocketSettings};
