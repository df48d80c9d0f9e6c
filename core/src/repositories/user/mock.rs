//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::principal::Principal;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    principals: Arc<RwLock<HashMap<String, Principal>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-populated with the given principals
    pub async fn with_principals(principals: Vec<Principal>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.principals.write().await;
            for principal in principals {
                map.insert(principal.username.clone(), principal);
            }
        }
        repository
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Principal>, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals.get(username).cloned())
    }

    async fn save(&self, principal: Principal) -> Result<Principal, DomainError> {
        let mut principals = self.principals.write().await;

        if principals.contains_key(&principal.username) {
            return Err(DomainError::Validation {
                message: "User already exists".to_string(),
            });
        }

        principals.insert(principal.username.clone(), principal.clone());
        Ok(principal)
    }

    async fn delete(&self, username: &str) -> Result<bool, DomainError> {
        let mut principals = self.principals.write().await;
        Ok(principals.remove(username).is_some())
    }
}
