//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing secrets and token lifetimes
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
