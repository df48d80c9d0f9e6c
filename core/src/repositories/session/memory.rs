//! In-memory session repository backed by sharded concurrent maps.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::r#trait::SessionRepository;

/// Process-local session registries
///
/// Both maps shard their locks by key, so operations on different usernames
/// do not contend and operations on the same username serialize through the
/// entry API. Nothing here blocks on I/O; the async signatures only satisfy
/// the [`SessionRepository`] boundary.
pub struct InMemorySessionRepository {
    /// username -> access tokens currently honored, in registration order
    access_tokens: DashMap<String, Vec<String>>,
    /// username -> current refresh token
    refresh_tokens: DashMap<String, String>,
}

impl InMemorySessionRepository {
    /// Create empty registries
    pub fn new() -> Self {
        Self {
            access_tokens: DashMap::new(),
            refresh_tokens: DashMap::new(),
        }
    }

    /// Number of users with at least one honored access token
    pub fn active_user_count(&self) -> usize {
        self.access_tokens.len()
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn register_access_token(&self, username: &str, token: &str) {
        self.access_tokens
            .entry(username.to_string())
            .or_default()
            .push(token.to_string());
    }

    async fn register_refresh_token(&self, username: &str, token: &str) {
        self.refresh_tokens
            .insert(username.to_string(), token.to_string());
    }

    async fn revoke_access_token(&self, username: &str, token: &str) -> bool {
        // Removal and the drop-empty-key rule happen under one entry lock so
        // a racing registration can never observe a half-applied revoke.
        match self.access_tokens.entry(username.to_string()) {
            Entry::Occupied(mut occupied) => {
                let tokens = occupied.get_mut();
                let found = match tokens.iter().position(|candidate| candidate == token) {
                    Some(position) => {
                        tokens.remove(position);
                        true
                    }
                    None => false,
                };
                if tokens.is_empty() {
                    occupied.remove();
                }
                found
            }
            Entry::Vacant(_) => false,
        }
    }

    async fn is_access_token_active(&self, username: &str, token: &str) -> bool {
        self.access_tokens
            .get(username)
            .map(|tokens| tokens.iter().any(|candidate| candidate == token))
            .unwrap_or(false)
    }

    async fn revoke_all(&self, username: &str) -> usize {
        let dropped = self
            .access_tokens
            .remove(username)
            .map(|(_, tokens)| tokens.len())
            .unwrap_or(0);
        self.refresh_tokens.remove(username);
        dropped
    }

    async fn find_refresh_token(&self, username: &str) -> Option<String> {
        self.refresh_tokens
            .get(username)
            .map(|entry| entry.value().clone())
    }

    async fn count_access_tokens(&self, username: &str) -> usize {
        self.access_tokens
            .get(username)
            .map(|tokens| tokens.len())
            .unwrap_or(0)
    }
}
