// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None (completely public access)
// Middleware: request tracing only. The retired verification route sets its
// own CORS headers and must not sit behind the general CORS layer.

pub mod auth;
pub mod system;

pub use auth::*;
pub use system::{health, root};
