//! WebSocket integration tests

pub mod websocket_test;
