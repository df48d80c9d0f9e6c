//! # CRM Bot Core
//!
//! Core authentication and session-revocation logic for the CRM bot backend.
//! This crate contains domain entities, the token codec, the session
//! registries, repository interfaces, and error types that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
