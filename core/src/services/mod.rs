//! Business services containing domain logic and use cases.

pub mod auth_service;
pub mod token;

// Re-export commonly used types
pub use auth_service::AuthService;
pub use token::{TokenCodec, TokenInspector};
