//! Authentication service for handling login and token revocation
//!
//! This service coordinates the authentication flow:
//! - Credential verification against the credential store
//! - Access and refresh token issuance
//! - Session registration and revocation in the token-state registries

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::token::TokenClass;
use crate::domain::value_objects::{LoginRequest, LoginResponse};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::token::TokenCodec;

/// Authentication service orchestrating login and revocation
///
/// The only writer of the session registries. Holds the credential store and
/// session repository behind their trait boundaries so the surrounding
/// server decides what backs them.
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// Credential store for principal lookups
    user_repository: Arc<U>,
    /// Registries of honored tokens
    sessions: Arc<S>,
    /// Codec for issuing and verifying tokens
    codec: Arc<TokenCodec>,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Credential store
    /// * `sessions` - Session repository tracking honored tokens
    /// * `codec` - Token codec
    pub fn new(user_repository: Arc<U>, sessions: Arc<S>, codec: Arc<TokenCodec>) -> Self {
        Self {
            user_repository,
            sessions,
            codec,
        }
    }

    /// Authenticates a principal and opens a new session
    ///
    /// This method:
    /// 1. Rejects a blank username
    /// 2. Looks the principal up in the credential store
    /// 3. Compares the supplied password against the stored bcrypt hash
    /// 4. Issues an access and a refresh token and registers both
    ///
    /// Repeated logins append additional concurrent sessions rather than
    /// replacing the prior one; each device holds its own access token.
    ///
    /// # Arguments
    ///
    /// * `request` - The supplied username and password
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - Token pair and the principal's primary role
    /// * `Err(DomainError::Auth(_))` - Missing username, unknown user, or
    ///   wrong password; the caller re-prompts credentials
    pub async fn login(&self, request: &LoginRequest) -> DomainResult<LoginResponse> {
        if request.username.trim().is_empty() {
            return Err(AuthError::MissingUsername.into());
        }

        let principal = self
            .user_repository
            .find_by_username(&request.username)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let password_matches = bcrypt::verify(&request.password, &principal.password_hash)
            .map_err(|_| DomainError::Internal {
                message: "Stored password hash is not a valid bcrypt hash".to_string(),
            })?;

        if !password_matches {
            warn!(username = %principal.username, "login rejected: password mismatch");
            return Err(AuthError::BadCredentials.into());
        }

        let access_token = self.codec.issue_access_token(&principal)?;
        let refresh_token = self.codec.issue_refresh_token(&principal)?;

        self.sessions
            .register_refresh_token(&principal.username, &refresh_token)
            .await;
        self.sessions
            .register_access_token(&principal.username, &access_token)
            .await;

        info!(username = %principal.username, "login successful");

        Ok(LoginResponse::new(
            access_token,
            refresh_token,
            principal.primary_role(),
        ))
    }

    /// Revokes a single access token
    ///
    /// A structurally invalid token cannot be revoked further and yields
    /// `Ok(false)` rather than an error. The operation is idempotent:
    /// revoking an already-revoked or never-registered token returns `false`
    /// without side effects.
    ///
    /// # Arguments
    ///
    /// * `access_token` - The access token to stop honoring
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The token was registered and has been removed
    /// * `Ok(false)` - The token is invalid, unknown, or already revoked
    pub async fn revoke(&self, access_token: &str) -> DomainResult<bool> {
        let claims = match self.codec.verify(access_token, TokenClass::Access) {
            Ok(claims) => claims,
            Err(error) => {
                debug!(%error, "revocation skipped: token failed verification");
                return Ok(false);
            }
        };

        let revoked = self
            .sessions
            .revoke_access_token(claims.username(), access_token)
            .await;

        if revoked {
            info!(username = %claims.sub, "access token revoked");
        }

        Ok(revoked)
    }

    /// Drops every session for a user
    ///
    /// Removes all of the user's access tokens and their refresh token from
    /// the registries.
    ///
    /// # Returns
    ///
    /// The number of access tokens that were dropped.
    pub async fn logout_all(&self, username: &str) -> usize {
        let dropped = self.sessions.revoke_all(username).await;
        if dropped > 0 {
            info!(username = %username, dropped, "all sessions revoked");
        }
        dropped
    }
}
