//! Backend Module
//!
//! All server-side code: an Axum HTTP server with a WebSocket endpoint for
//! live dashboard updates.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - AppState, store selection, router construction
//! ├── routes/         - Route configuration
//! ├── realtime/       - Connection registry, broadcaster, `/ws` loop
//! ├── auth/           - Registration, login, tokens, password hashing
//! ├── questions/      - Question handlers
//! ├── answers/        - Answer handlers
//! ├── authors.rs      - Username attachment with Anonymous fallback
//! ├── store/          - QaStore trait, PostgreSQL and in-memory stores
//! ├── integrations/   - Webhook and suggestion clients
//! └── error/          - BackendError and its HTTP conversion
//! ```
//!
//! # Data Flow
//!
//! A handler validates its request, writes through the store, attaches the
//! author's username and hands the resulting event to the broadcaster. The
//! broadcaster fans the serialized frame out to every registered socket.

/// Server setup and state
pub mod server;

/// Route configuration
pub mod routes;

/// Real-time connection management and broadcasting
pub mod realtime;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Question handlers
pub mod questions;

/// Answer handlers
pub mod answers;

/// Author name resolution
pub mod authors;

/// Persistence
pub mod store;

/// Outbound HTTP integrations
pub mod integrations;

pub use error::BackendError;
pub use realtime::{Broadcaster, ConnectionRegistry};
pub use server::{build_app, create_app};
