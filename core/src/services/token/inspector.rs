//! Registry-independent token inspection for authorization middleware.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use std::sync::Arc;

use crate::domain::entities::token::TokenClass;
use crate::errors::{DomainError, TokenError};

use super::codec::TokenCodec;

/// Read-only helpers over presented access tokens
///
/// Every method here is a pure function of the token's contents plus the
/// current clock; none consults the session registries. A revoked but
/// unexpired token therefore still reads successfully — structural validity
/// is the cheap, stateless tier, and callers that care about revocation must
/// additionally ask the session repository whether the token is honored.
pub struct TokenInspector {
    codec: Arc<TokenCodec>,
}

impl TokenInspector {
    /// Creates a new inspector over the given codec
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// The username a presented access token was issued to
    ///
    /// Verifies signature and expiry against the access secret before
    /// reading the subject.
    pub fn username_of(&self, token: &str) -> Result<String, DomainError> {
        let claims = self.codec.verify(token, TokenClass::Access)?;
        Ok(claims.sub)
    }

    /// The roles carried by a presented access token
    ///
    /// Verifies signature and expiry against the access secret. The role set
    /// is the one frozen into the token at issuance time; role changes after
    /// login surface only on the next issuance.
    pub fn roles_of(&self, token: &str) -> Result<Vec<String>, DomainError> {
        let claims = self.codec.verify(token, TokenClass::Access)?;
        Ok(claims.roles)
    }

    /// Whether a token's embedded expiry has passed
    ///
    /// Decodes without signature verification: this answers "is it stale",
    /// not "is it trustworthy". Fails only on undecodable input.
    pub fn is_expired(&self, token: &str) -> Result<bool, DomainError> {
        let claims = self.codec.extract_claims(token)?;
        Ok(claims.is_expired())
    }

    /// Checks that a token is valid and belongs to the given username
    ///
    /// # Returns
    ///
    /// `true` when the token verifies against the access secret, is
    /// unexpired, and its subject equals `username`
    pub fn validate_for_user(&self, token: &str, username: &str) -> bool {
        match self.codec.verify(token, TokenClass::Access) {
            Ok(claims) => claims.sub == username,
            Err(_) => false,
        }
    }

    /// Decodes a verified access token's header and payload
    ///
    /// # Returns
    ///
    /// The header and payload JSON, newline-separated, after the token has
    /// passed structural verification; the verification error otherwise.
    pub fn decode_token(&self, token: &str) -> Result<String, DomainError> {
        self.codec.verify(token, TokenClass::Access)?;

        let mut chunks = token.split('.');
        let header = decode_segment(chunks.next())?;
        let payload = decode_segment(chunks.next())?;

        Ok(format!("{}\n{}", header, payload))
    }
}

/// Decodes one base64url token segment into its JSON text
fn decode_segment(segment: Option<&str>) -> Result<String, DomainError> {
    let segment = segment.ok_or(DomainError::Token(TokenError::Malformed))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| DomainError::Token(TokenError::Malformed))?;
    String::from_utf8(bytes).map_err(|_| DomainError::Token(TokenError::Malformed))
}
