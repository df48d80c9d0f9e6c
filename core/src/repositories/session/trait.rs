//! Session repository trait defining the token-state boundary.

use async_trait::async_trait;

/// Repository trait for per-user token state
///
/// Tracks, per username, the access tokens currently honored and the single
/// current refresh token. Operations never fail; they return booleans,
/// counts, or options. Implementations must make same-username operations
/// linearizable: two concurrent registrations both land, and a revoke racing
/// a registration of the same token string resolves to "not found" or
/// "found then removed", never a torn read.
///
/// The registries are process-local by default and start empty; after a
/// restart, previously issued tokens still verify structurally but are no
/// longer honored.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Record a newly issued access token for a user
    ///
    /// Appends to the user's collection, creating it if absent. A user may
    /// hold multiple concurrent access tokens, one per device or session.
    async fn register_access_token(&self, username: &str, token: &str);

    /// Record a newly issued refresh token for a user
    ///
    /// Overwrites the prior entry; the last-issued refresh token wins.
    async fn register_refresh_token(&self, username: &str, token: &str);

    /// Stop honoring one access token
    ///
    /// # Returns
    /// * `true` - The token was present and has been removed
    /// * `false` - The token was not registered for this user
    async fn revoke_access_token(&self, username: &str, token: &str) -> bool;

    /// Check whether an access token is still honored
    ///
    /// Used for revocation confirmation and security-sensitive operations
    /// only, never on the hot read path of ordinary authenticated requests.
    async fn is_access_token_active(&self, username: &str, token: &str) -> bool;

    /// Drop every session for a user
    ///
    /// Removes all access tokens and the refresh token.
    ///
    /// # Returns
    /// The number of access tokens that were dropped.
    async fn revoke_all(&self, username: &str) -> usize;

    /// The user's current refresh token, if one is registered
    async fn find_refresh_token(&self, username: &str) -> Option<String>;

    /// Number of access tokens currently honored for a user
    async fn count_access_tokens(&self, username: &str) -> usize;
}
