//! Test suite for the Q&A dashboard backend
//!
//! Every test starts the full router on an ephemeral port over the
//! in-memory store and talks to it over real HTTP and WebSocket clients.

pub mod common;
pub mod integration;
