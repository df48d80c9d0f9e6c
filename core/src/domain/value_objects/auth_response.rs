//! Login request and response value objects.

use serde::{Deserialize, Serialize};

/// Token type reported to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Credentials supplied by a login attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The username of the principal requesting authentication
    pub username: String,

    /// The password of the principal requesting authentication
    pub password: String,
}

impl LoginRequest {
    /// Creates a new login request
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Response returned after a successful login
///
/// Contains the freshly issued token pair and the principal's primary role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The type of the token, always "Bearer"
    #[serde(rename = "type")]
    pub token_type: String,

    /// The access token issued upon successful authentication
    pub access_token: String,

    /// The refresh token issued along with the access token
    pub refresh_token: String,

    /// The principal's primary role, such as "USER" or "ADMIN"
    pub role: String,
}

impl LoginResponse {
    /// Creates a new login response
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            token_type: TOKEN_TYPE_BEARER.to_string(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            role: role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_is_bearer() {
        let response = LoginResponse::new("access", "refresh", "ADMIN");

        assert_eq!(response.token_type, TOKEN_TYPE_BEARER);
        assert_eq!(response.role, "ADMIN");
    }

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse::new("a", "r", "USER");
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"type\":\"Bearer\""));

        let deserialized: LoginResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, deserialized);
    }
}
