//! Route Configuration
//!
//! - **`router`** - top-level router, status route, `/ws`, layers
//! - **`api_routes`** - `/api/*` handlers

/// Main router
pub mod router;

/// API routes
pub mod api_routes;

pub use router::create_router;
