//! Q&A Dashboard - Main Library
//!
//! Backend for a live question and answer dashboard. Users register, post
//! questions and answers, and every connected dashboard receives updates
//! over a WebSocket at `/ws`.
//!
//! # Module Structure
//!
//! - **`shared`** - Event wire format, validation errors, configuration
//! - **`backend`** - Axum server, connection registry, broadcast dispatcher,
//!   request handlers, persistence and outbound integrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use qa_dashboard::backend::server::init::create_app;
//! use qa_dashboard::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The connection registry is a `parking_lot::Mutex` around a map and is
//! shared through `Arc` in `AppState`. Each connection owns an unbounded
//! outbound queue drained by its own writer task.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
