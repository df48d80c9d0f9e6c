//! User repository trait defining the credential-store boundary.

use async_trait::async_trait;

use crate::domain::entities::principal::Principal;
use crate::errors::DomainError;

/// Repository trait for Principal persistence operations
///
/// This trait is the authentication core's view of the credential store.
/// Implementations own account storage and password hashing at rest; the
/// core only ever reads principals during login.
///
/// # Security Considerations
/// - Passwords are stored as salted bcrypt hashes, never plaintext
/// - `find_by_username` is called with untrusted input and must not be
///   susceptible to injection in the backing store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a principal by username
    ///
    /// # Arguments
    /// * `username` - The unique login name
    ///
    /// # Returns
    /// * `Ok(Some(Principal))` - Principal found
    /// * `Ok(None)` - No principal with the given username
    /// * `Err(DomainError)` - Lookup failed in the backing store
    async fn find_by_username(&self, username: &str) -> Result<Option<Principal>, DomainError>;

    /// Persist a principal
    ///
    /// # Returns
    /// * `Ok(Principal)` - The saved principal
    /// * `Err(DomainError)` - Save failed (e.g. duplicate username)
    async fn save(&self, principal: Principal) -> Result<Principal, DomainError>;

    /// Delete a principal by username
    ///
    /// # Returns
    /// * `Ok(true)` - Principal existed and was deleted
    /// * `Ok(false)` - No principal with the given username
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether a username is taken
    async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
