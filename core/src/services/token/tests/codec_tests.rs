//! Unit tests for the token codec

use crm_shared::config::JwtConfig;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::TokenClass;
use crate::errors::{ConfigError, DomainError, TokenError};
use crate::services::token::TokenCodec;

fn test_principal() -> Principal {
    Principal::new(
        "alice",
        "$2b$04$irrelevant-for-codec-tests",
        vec!["ADMIN".to_string(), "USER".to_string()],
    )
}

fn create_test_codec() -> TokenCodec {
    TokenCodec::new(&JwtConfig::default()).expect("Failed to create token codec")
}

#[test]
fn test_issue_and_verify_access_token() {
    let codec = create_test_codec();
    let principal = test_principal();

    let token = codec.issue_access_token(&principal).unwrap();
    let claims = codec.verify(&token, TokenClass::Access).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.class, TokenClass::Access);
    assert_eq!(claims.user_id, Some(principal.id));
    assert_eq!(claims.roles, principal.roles);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_issue_and_verify_refresh_token() {
    let codec = create_test_codec();
    let principal = test_principal();

    let token = codec.issue_refresh_token(&principal).unwrap();
    let claims = codec.verify(&token, TokenClass::Refresh).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.class, TokenClass::Refresh);
    assert_eq!(claims.user_id, None);
    assert!(claims.roles.is_empty());
}

#[test]
fn test_token_classes_are_not_interchangeable() {
    let codec = create_test_codec();
    let principal = test_principal();

    let access_token = codec.issue_access_token(&principal).unwrap();
    let refresh_token = codec.issue_refresh_token(&principal).unwrap();

    // Signed with the other class's secret, so the signature check rejects.
    assert!(matches!(
        codec.verify(&access_token, TokenClass::Refresh),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
    assert!(matches!(
        codec.verify(&refresh_token, TokenClass::Access),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_class_claim_rejects_cross_use_even_with_shared_secret() {
    // Deliberately misconfigure both classes onto one secret; the class
    // claim is the remaining line of defense.
    let secret = JwtConfig::default().access_secret;
    let codec = TokenCodec::new(&JwtConfig::new(secret.clone(), secret)).unwrap();
    let principal = test_principal();

    let refresh_token = codec.issue_refresh_token(&principal).unwrap();

    assert!(matches!(
        codec.verify(&refresh_token, TokenClass::Access),
        Err(DomainError::Token(TokenError::UnsupportedFormat))
    ));
}

#[test]
fn test_expired_token_fails_verification() {
    let config = JwtConfig::default().with_access_expiry_hours(-1);
    let codec = TokenCodec::new(&config).unwrap();

    let token = codec.issue_access_token(&test_principal()).unwrap();

    assert!(matches!(
        codec.verify(&token, TokenClass::Access),
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[test]
fn test_token_from_foreign_key_fails_signature_check() {
    let codec = create_test_codec();
    let foreign = TokenCodec::new(&JwtConfig::new(
        "Zm9yZWlnbi1hY2Nlc3Mtc2VjcmV0LXRoYXQtaXMtbG9uZy1lbm91Z2gh",
        "Zm9yZWlnbi1yZWZyZXNoLXNlY3JldC10aGF0LWlzLWxvbmctZW5vdWdoIQ==",
    ))
    .unwrap();

    let token = foreign.issue_access_token(&test_principal()).unwrap();

    assert!(matches!(
        codec.verify(&token, TokenClass::Access),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_token_from_foreign_issuer_is_unsupported() {
    let config = JwtConfig::default().with_issuer("somebody-else");
    let foreign_issuer = TokenCodec::new(&config).unwrap();
    let codec = create_test_codec();

    let token = foreign_issuer.issue_access_token(&test_principal()).unwrap();

    assert!(matches!(
        codec.verify(&token, TokenClass::Access),
        Err(DomainError::Token(TokenError::UnsupportedFormat))
    ));
}

#[test]
fn test_garbage_input_is_malformed() {
    let codec = create_test_codec();

    for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d", "!!!.???.###"] {
        assert!(
            matches!(
                codec.verify(garbage, TokenClass::Access),
                Err(DomainError::Token(TokenError::Malformed))
            ),
            "expected Malformed for {:?}",
            garbage
        );
    }
}

#[test]
fn test_extract_claims_skips_signature_and_expiry() {
    let expired = TokenCodec::new(&JwtConfig::default().with_access_expiry_hours(-1)).unwrap();

    let token = expired.issue_access_token(&test_principal()).unwrap();
    let claims = expired.extract_claims(&token).unwrap();

    assert_eq!(claims.sub, "alice");
    assert!(claims.is_expired());

    // A codec with different keys can still extract: no signature involved.
    let other = create_test_codec();
    assert_eq!(other.extract_claims(&token).unwrap().sub, "alice");
}

#[test]
fn test_extract_claims_rejects_garbage() {
    let codec = create_test_codec();

    assert!(matches!(
        codec.extract_claims("still-not-a-jwt"),
        Err(DomainError::Token(TokenError::Malformed))
    ));
}

#[test]
fn test_validate_helpers_swallow_errors() {
    let codec = create_test_codec();
    let principal = test_principal();

    let access_token = codec.issue_access_token(&principal).unwrap();
    let refresh_token = codec.issue_refresh_token(&principal).unwrap();

    assert!(codec.validate_access_token(&access_token));
    assert!(codec.validate_refresh_token(&refresh_token));
    assert!(!codec.validate_access_token(&refresh_token));
    assert!(!codec.validate_refresh_token(&access_token));
    assert!(!codec.validate_access_token("garbage"));
}

#[test]
fn test_distinct_tokens_for_back_to_back_issuance() {
    let codec = create_test_codec();
    let principal = test_principal();

    let first = codec.issue_access_token(&principal).unwrap();
    let second = codec.issue_access_token(&principal).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_missing_secret_fails_fast() {
    let config = JwtConfig::new("", "cmVmcmVzaA==");

    assert!(matches!(
        TokenCodec::new(&config),
        Err(DomainError::Config(ConfigError::MissingSecret { name: "access" }))
    ));
}

#[test]
fn test_non_base64_secret_fails_fast() {
    let config = JwtConfig::new(JwtConfig::default().access_secret, "not valid base64 !!!");

    assert!(matches!(
        TokenCodec::new(&config),
        Err(DomainError::Config(ConfigError::InvalidSecret { name: "refresh" }))
    ));
}

#[test]
fn test_short_secret_fails_fast() {
    // "c2hvcnQ=" decodes to the five bytes of "short".
    let config = JwtConfig::new("c2hvcnQ=", JwtConfig::default().refresh_secret);

    assert!(matches!(
        TokenCodec::new(&config),
        Err(DomainError::Config(ConfigError::WeakSecret {
            name: "access",
            actual: 5,
            ..
        }))
    ));
}
