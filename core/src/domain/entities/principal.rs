//! Principal entity representing an authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned when a principal carries no explicit roles
pub const DEFAULT_ROLE: &str = "USER";

/// Identity record owned by the credential store
///
/// The authentication core reads principals but never mutates them; account
/// management lives behind the [`UserRepository`](crate::repositories::UserRepository)
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier for the principal
    pub id: Uuid,

    /// Unique, stable login name
    pub username: String,

    /// Bcrypt hash of the principal's password
    pub password_hash: String,

    /// Role names in assignment order
    pub roles: Vec<String>,

    /// Timestamp when the principal was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the principal was last updated
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// Creates a new Principal instance
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            roles,
            created_at: now,
            updated_at: now,
        }
    }

    /// The principal's primary role: the first assigned role, or
    /// [`DEFAULT_ROLE`] when none are assigned
    pub fn primary_role(&self) -> &str {
        self.roles
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_ROLE)
    }

    /// Checks whether the principal carries the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.updated_at = Utc::now();
    }
}
