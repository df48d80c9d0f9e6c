//! Session registries tracking which issued tokens are still honored.
//!
//! A token's signature and expiry are verifiable without any mutable state;
//! these registries are the separate, mutable authority on whether a
//! structurally valid token should still be accepted. The trait boundary
//! exists so a shared store can replace the in-memory default without
//! touching the core contracts.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemorySessionRepository;
pub use r#trait::SessionRepository;

#[cfg(test)]
mod tests;
