//! Server Module
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - store selection from configuration
//! - **`init`** - router construction

/// Application state
pub mod state;

/// Store selection
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_app, create_app, InitError};
pub use state::AppState;
