//! Shared Module
//!
//! Types that are not tied to the HTTP server: the real-time event wire
//! format, validation errors and application configuration.

/// Real-time event system
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use event::{Event, EventType};
