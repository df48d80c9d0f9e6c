//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::principal::Principal;

/// Default access token lifetime (24 hours)
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Default refresh token lifetime (30 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 30;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "crm-for-bot";

/// Token class carried in the `class` claim
///
/// Access and refresh tokens are additionally signed with independent
/// secrets; the claim makes a token self-describing so a key misconfiguration
/// can never silently blur the two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenClass::Access => write!(f, "access"),
            TokenClass::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Token class (access or refresh)
    pub class: TokenClass,

    /// Principal id, set on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    /// Role set at issuance time, set on access tokens only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// Carries the principal's id and role set alongside the subject so the
    /// authorization middleware can act on a verified token without a
    /// credential-store round trip.
    pub fn new_access_token(principal: &Principal, lifetime: Duration, issuer: &str) -> Self {
        let now = Utc::now();

        Self {
            sub: principal.username.clone(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            class: TokenClass::Access,
            user_id: Some(principal.id),
            roles: principal.roles.clone(),
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// Refresh tokens carry the subject only.
    pub fn new_refresh_token(principal: &Principal, lifetime: Duration, issuer: &str) -> Self {
        let now = Utc::now();

        Self {
            sub: principal.username.clone(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            class: TokenClass::Refresh,
            user_id: None,
            roles: Vec::new(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// The username the token was issued to
    pub fn username(&self) -> &str {
        &self.sub
    }
}
