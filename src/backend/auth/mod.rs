//! Authentication Module
//!
//! Registration, login, password hashing and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing with the 72-byte limit
//! ├── sessions.rs     - JWT issue and verification
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types and validation
//!     ├── register.rs - POST /api/register
//!     └── login.rs    - POST /api/login
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs that expire after 30 days
//! - Unknown email and wrong password return the same 401

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use password::{PasswordError, PasswordHasher, MAX_PASSWORD_BYTES};
pub use sessions::{Claims, TokenService};
