//! Unit tests for the token inspector

use std::sync::Arc;

use crm_shared::config::JwtConfig;

use crate::domain::entities::principal::Principal;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenInspector};

fn test_principal() -> Principal {
    Principal::new(
        "alice",
        "$2b$04$irrelevant-for-inspector-tests",
        vec!["ADMIN".to_string(), "USER".to_string()],
    )
}

fn create_test_inspector() -> (TokenInspector, Arc<TokenCodec>) {
    let codec = Arc::new(TokenCodec::new(&JwtConfig::default()).unwrap());
    (TokenInspector::new(Arc::clone(&codec)), codec)
}

#[test]
fn test_username_of_verified_token() {
    let (inspector, codec) = create_test_inspector();
    let token = codec.issue_access_token(&test_principal()).unwrap();

    assert_eq!(inspector.username_of(&token).unwrap(), "alice");
}

#[test]
fn test_roles_of_verified_token() {
    let (inspector, codec) = create_test_inspector();
    let token = codec.issue_access_token(&test_principal()).unwrap();

    assert_eq!(inspector.roles_of(&token).unwrap(), vec!["ADMIN", "USER"]);
}

#[test]
fn test_username_of_rejects_refresh_token() {
    let (inspector, codec) = create_test_inspector();
    let token = codec.issue_refresh_token(&test_principal()).unwrap();

    assert!(matches!(
        inspector.username_of(&token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_expired_token_reads_as_expired_but_not_trusted() {
    let codec =
        Arc::new(TokenCodec::new(&JwtConfig::default().with_access_expiry_hours(-1)).unwrap());
    let inspector = TokenInspector::new(Arc::clone(&codec));
    let token = codec.issue_access_token(&test_principal()).unwrap();

    // is_expired answers from the embedded expiry without a signature check,
    // while the verifying readers refuse the stale token.
    assert!(inspector.is_expired(&token).unwrap());
    assert!(matches!(
        inspector.username_of(&token),
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[test]
fn test_is_expired_on_fresh_token() {
    let (inspector, codec) = create_test_inspector();
    let token = codec.issue_access_token(&test_principal()).unwrap();

    assert!(!inspector.is_expired(&token).unwrap());
}

#[test]
fn test_is_expired_rejects_garbage() {
    let (inspector, _) = create_test_inspector();

    assert!(matches!(
        inspector.is_expired("garbage"),
        Err(DomainError::Token(TokenError::Malformed))
    ));
}

#[test]
fn test_validate_for_user() {
    let (inspector, codec) = create_test_inspector();
    let token = codec.issue_access_token(&test_principal()).unwrap();

    assert!(inspector.validate_for_user(&token, "alice"));
    assert!(!inspector.validate_for_user(&token, "bob"));
    assert!(!inspector.validate_for_user("garbage", "alice"));
}

#[test]
fn test_decode_token_exposes_header_and_payload() {
    let (inspector, codec) = create_test_inspector();
    let token = codec.issue_access_token(&test_principal()).unwrap();

    let decoded = inspector.decode_token(&token).unwrap();
    let (header, payload) = decoded.split_once('\n').unwrap();

    assert!(header.contains("HS256"));
    assert!(payload.contains("\"sub\":\"alice\""));
    assert!(payload.contains("\"class\":\"access\""));
}

#[test]
fn test_decode_token_requires_a_valid_access_token() {
    let (inspector, codec) = create_test_inspector();

    assert!(matches!(
        inspector.decode_token("garbage"),
        Err(DomainError::Token(TokenError::Malformed))
    ));

    let refresh_token = codec.issue_refresh_token(&test_principal()).unwrap();
    assert!(matches!(
        inspector.decode_token(&refresh_token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}
