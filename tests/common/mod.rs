//! Common test utilities
//!
//! - `server` - running test server over the in-memory store
//! - `ws` - WebSocket client helpers

pub mod server;
pub mod ws;

pub use server::*;
pub use ws::*;
