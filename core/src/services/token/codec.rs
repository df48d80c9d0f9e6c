//! Token codec: issuance and structural validation of signed tokens.

use base64::engine::general_purpose::{STANDARD as BASE64_STANDARD, URL_SAFE_NO_PAD as BASE64_URL_SAFE};
use base64::Engine as _;
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::warn;

use crm_shared::config::JwtConfig;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::{Claims, TokenClass};
use crate::errors::{ConfigError, DomainError, TokenError};

/// Minimum decoded secret length accepted for HMAC-SHA256 signing
const MIN_SECRET_BYTES: usize = 32;

/// The sole authority on cryptographic token validity
///
/// Issues and parses HMAC-SHA256 signed JWTs. Access and refresh tokens are
/// signed with independent secrets, so a captured token of one class can
/// never be presented as the other. Tokens are self-contained: signature and
/// expiry are checked against key material and the clock alone, with no
/// mutable state involved.
pub struct TokenCodec {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_token_lifetime: Duration,
    refresh_token_lifetime: Duration,
    issuer: String,
}

impl TokenCodec {
    /// Creates a new token codec from JWT configuration
    ///
    /// Decodes both base64 secrets into HMAC key material. Fails fast on a
    /// missing, non-base64, or too-short secret; a process must not come up
    /// with a broken signing key.
    ///
    /// # Arguments
    ///
    /// * `config` - JWT configuration carrying secrets, lifetimes, and issuer
    ///
    /// # Returns
    ///
    /// A new `TokenCodec` instance or a fatal configuration error
    pub fn new(config: &JwtConfig) -> Result<Self, DomainError> {
        let access_secret = decode_secret("access", &config.access_secret)?;
        let refresh_secret = decode_secret("refresh", &config.refresh_secret)?;

        Ok(Self {
            access_encoding_key: EncodingKey::from_secret(&access_secret),
            access_decoding_key: DecodingKey::from_secret(&access_secret),
            refresh_encoding_key: EncodingKey::from_secret(&refresh_secret),
            refresh_decoding_key: DecodingKey::from_secret(&refresh_secret),
            access_token_lifetime: Duration::hours(config.access_token_expiry_hours),
            refresh_token_lifetime: Duration::days(config.refresh_token_expiry_days),
            issuer: config.issuer.clone(),
        })
    }

    /// Generates an access token for a principal
    ///
    /// The token carries the principal's username as subject plus the
    /// principal id and role set at issuance time, and expires after the
    /// configured access lifetime.
    pub fn issue_access_token(&self, principal: &Principal) -> Result<String, DomainError> {
        let claims =
            Claims::new_access_token(principal, self.access_token_lifetime, &self.issuer);
        self.encode_jwt(&claims, &self.access_encoding_key)
    }

    /// Generates a refresh token for a principal
    ///
    /// Carries the subject only and expires after the configured refresh
    /// lifetime.
    pub fn issue_refresh_token(&self, principal: &Principal) -> Result<String, DomainError> {
        let claims =
            Claims::new_refresh_token(principal, self.refresh_token_lifetime, &self.issuer);
        self.encode_jwt(&claims, &self.refresh_encoding_key)
    }

    /// Verifies a token structurally and returns its claims
    ///
    /// Checks the signature against the secret for the requested class, the
    /// expiry against the current time with zero leeway, and the issuer and
    /// class claims. Verification consults no mutable state; whether a
    /// structurally valid token is still honored is the session registry's
    /// decision.
    ///
    /// # Arguments
    ///
    /// * `token` - The encoded token string
    /// * `class` - The class the caller expects the token to be
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if structurally valid
    /// * `Err(DomainError::Token(_))` - Expired, malformed, wrongly signed,
    ///   or not a token of the requested class
    pub fn verify(&self, token: &str, class: TokenClass) -> Result<Claims, DomainError> {
        let decoding_key = match class {
            TokenClass::Access => &self.access_decoding_key,
            TokenClass::Refresh => &self.refresh_decoding_key,
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);

        let token_data =
            decode::<Claims>(token, decoding_key, &validation).map_err(map_jwt_error)?;

        // The dual-secret split already rejects cross-class tokens; the
        // claim check additionally catches identical-secret misconfiguration.
        if token_data.claims.class != class {
            return Err(DomainError::Token(TokenError::UnsupportedFormat));
        }

        Ok(token_data.claims)
    }

    /// Parses a token's claims without verifying signature or expiry
    ///
    /// For trusted internal callers after `verify` has already succeeded, or
    /// for read-only inspection where staleness is acceptable. Never make an
    /// authorization decision from unverified claims.
    pub fn extract_claims(&self, token: &str) -> Result<Claims, DomainError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(DomainError::Token(TokenError::Malformed));
        }

        let payload = BASE64_URL_SAFE
            .decode(parts[1])
            .map_err(|_| DomainError::Token(TokenError::Malformed))?;

        serde_json::from_slice(&payload).map_err(|_| DomainError::Token(TokenError::Malformed))
    }

    /// Validates an access token, logging the failure class
    ///
    /// # Returns
    ///
    /// `true` if the token is structurally valid, `false` otherwise
    pub fn validate_access_token(&self, token: &str) -> bool {
        self.validate(token, TokenClass::Access)
    }

    /// Validates a refresh token, logging the failure class
    ///
    /// # Returns
    ///
    /// `true` if the token is structurally valid, `false` otherwise
    pub fn validate_refresh_token(&self, token: &str) -> bool {
        self.validate(token, TokenClass::Refresh)
    }

    fn validate(&self, token: &str, class: TokenClass) -> bool {
        match self.verify(token, class) {
            Ok(_) => true,
            Err(DomainError::Token(TokenError::Expired)) => {
                warn!(%class, "token expired");
                false
            }
            Err(DomainError::Token(TokenError::InvalidSignature)) => {
                warn!(%class, "invalid token signature");
                false
            }
            Err(DomainError::Token(TokenError::UnsupportedFormat)) => {
                warn!(%class, "unsupported token");
                false
            }
            Err(_) => {
                warn!(%class, "malformed token");
                false
            }
        }
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }
}

/// Decodes one base64 secret, enforcing presence and minimum key length
fn decode_secret(name: &'static str, value: &str) -> Result<Vec<u8>, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingSecret { name });
    }

    let bytes = BASE64_STANDARD
        .decode(value.trim())
        .map_err(|_| ConfigError::InvalidSecret { name })?;

    if bytes.len() < MIN_SECRET_BYTES {
        return Err(ConfigError::WeakSecret {
            name,
            actual: bytes.len(),
            minimum: MIN_SECRET_BYTES,
        });
    }

    Ok(bytes)
}

/// Maps jsonwebtoken failures onto the token error taxonomy
fn map_jwt_error(error: jsonwebtoken::errors::Error) -> DomainError {
    use jsonwebtoken::errors::ErrorKind;

    let token_error = match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::MissingAlgorithm
        | ErrorKind::InvalidIssuer
        | ErrorKind::ImmatureSignature
        | ErrorKind::MissingRequiredClaim(_) => TokenError::UnsupportedFormat,
        _ => TokenError::Malformed,
    };

    DomainError::Token(token_error)
}
