//! Error type definitions for authentication, token handling, and startup
//! configuration.
//!
//! `AuthError` and `TokenError` are recoverable by the caller (re-prompt
//! credentials, re-authenticate, or refresh). `ConfigError` is raised only
//! while wiring the service at startup and is the one condition that must
//! abort the process before it accepts traffic.

use crm_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
///
/// These errors represent login failure scenarios. API-facing messages are
/// mapped in the presentation layer; the variants stay distinct so internal
/// logs can tell an unknown user from a wrong password.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username is missing")]
    MissingUsername,

    #[error("User not found")]
    UserNotFound,

    #[error("Password is incorrect")]
    BadCredentials,
}

/// Token-related errors
///
/// These errors represent the distinct ways a presented token can fail
/// structural validation. Callers that only care about pass/fail can treat
/// them uniformly; callers that distinguish "expired" from "tampered" match
/// on the variant.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Unsupported token")]
    UnsupportedFormat,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Startup configuration errors
///
/// Raised while decoding signing secrets into key material. Any of these is
/// fatal: the service must refuse to start rather than issue tokens signed
/// with a broken key.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing {name} signing secret")]
    MissingSecret { name: &'static str },

    #[error("The {name} signing secret is not valid base64")]
    InvalidSecret { name: &'static str },

    #[error("The {name} signing secret is too short: {actual} bytes, minimum {minimum}")]
    WeakSecret {
        name: &'static str,
        actual: usize,
        minimum: usize,
    },
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::MissingUsername => "MISSING_USERNAME",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::BadCredentials => "BAD_CREDENTIALS",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::Malformed => "MALFORMED_TOKEN",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::UnsupportedFormat => "UNSUPPORTED_TOKEN",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ConfigError to ErrorResponse
impl From<ConfigError> for ErrorResponse {
    fn from(err: ConfigError) -> Self {
        let error_code = match &err {
            ConfigError::MissingSecret { .. } => "MISSING_SECRET",
            ConfigError::InvalidSecret { .. } => "INVALID_SECRET",
            ConfigError::WeakSecret { .. } => "WEAK_SECRET",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
