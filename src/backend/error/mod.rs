//! Backend Error Module
//!
//! Error types raised by HTTP handlers and their conversion into JSON
//! responses of the form `{"detail": <message>, "status": <code>}`.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust
//! use qa_dashboard::backend::error::BackendError;
//!
//! fn lookup(found: bool) -> Result<(), BackendError> {
//!     if !found {
//!         return Err(BackendError::not_found("Question not found"));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(lookup(false).unwrap_err().status_code().as_u16(), 404);
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
