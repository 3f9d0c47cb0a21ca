//! Authentication Handlers
//!
//! - **`register`** - POST /api/register
//! - **`login`** - POST /api/login

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

pub use login::login;
pub use register::register;
pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
