//! Token module for JWT management
//!
//! This module handles all token-related operations:
//! - Access and refresh token issuance with independent signing secrets
//! - Structural verification (signature and expiry)
//! - Claim extraction for trusted internal callers
//! - Registry-independent inspection helpers for authorization middleware

mod codec;
mod inspector;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use inspector::TokenInspector;
