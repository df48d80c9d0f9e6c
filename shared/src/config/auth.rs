//! JWT signing configuration
//!
//! Access and refresh tokens are signed with independent secrets so a
//! captured token of one class can never be presented as the other. Secrets
//! are supplied base64-encoded and decoded into HMAC key material at startup.

use serde::{Deserialize, Serialize};

/// Default base64-encoded access secret for local development only.
const DEV_ACCESS_SECRET: &str = "Y3JtLWJvdC1kZXYtYWNjZXNzLXNlY3JldC1jaGFuZ2UtaW4tcHJvZHVjdGlvbiEh";

/// Default base64-encoded refresh secret for local development only.
const DEV_REFRESH_SECRET: &str = "Y3JtLWJvdC1kZXYtcmVmcmVzaC1zZWNyZXQtY2hhbmdlLWluLXByb2R1Y3Rpb24h";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Base64-encoded secret for signing access tokens
    pub access_secret: String,

    /// Base64-encoded secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in hours
    pub access_token_expiry_hours: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEV_ACCESS_SECRET),
            refresh_secret: String::from(DEV_REFRESH_SECRET),
            access_token_expiry_hours: 24,
            refresh_token_expiry_days: 30,
            issuer: String::from("crm-for-bot"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in hours
    pub fn with_access_expiry_hours(mut self, hours: i64) -> Self {
        self.access_token_expiry_hours = hours;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Check if either secret is still a default one (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEV_ACCESS_SECRET || self.refresh_secret == DEV_REFRESH_SECRET
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_ACCESS_SECRET`, `JWT_REFRESH_SECRET`,
    /// `JWT_ACCESS_EXPIRY_HOURS` and `JWT_REFRESH_EXPIRY_DAYS`, falling back
    /// to development defaults when unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .unwrap_or(defaults.access_secret);
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .unwrap_or(defaults.refresh_secret);
        let access_token_expiry_hours = std::env::var("JWT_ACCESS_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry_hours);
        let refresh_token_expiry_days = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expiry_days);

        Self {
            access_secret,
            refresh_secret,
            access_token_expiry_hours,
            refresh_token_expiry_days,
            issuer: defaults.issuer,
        }
    }
}
