//! Shared utilities and common types for the CRM bot server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (JWT signing, environment, logging)
//! - Response envelope and error payload structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{Environment, JwtConfig, LogFormat, LoggingConfig};
pub use types::{ApiResponse, ErrorResponse};
