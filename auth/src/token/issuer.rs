use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

const DEFAULT_TTL_HOURS: i64 = 8;

/// Issues and verifies HS256-signed access tokens.
///
/// The algorithm is pinned at construction: a token whose header advertises
/// anything other than HS256 fails verification, as does a token without an
/// `exp` claim.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with the default 8 hour token lifetime.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::hours(DEFAULT_TTL_HOURS))
    }

    /// Create an issuer with a custom default token lifetime.
    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Sign a token for the given user, expiring after the issuer's lifetime.
    ///
    /// # Errors
    /// * `IssuanceFailed` - signing the token failed
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_with_ttl(user_id, self.ttl)
    }

    /// Sign a token with an explicit lifetime, overriding the issuer's default.
    ///
    /// # Errors
    /// * `IssuanceFailed` - signing the token failed
    pub fn issue_with_ttl(&self, user_id: Uuid, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::IssuanceFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Expiry is checked with zero clock tolerance: a token is rejected from
    /// its `exp` instant onward.
    ///
    /// # Errors
    /// * `Expired` - the token's `exp` lies in the past
    /// * `Invalid` - bad signature, wrong algorithm, malformed token, or
    ///   missing required claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        // Validation::new requires the exp claim; tokens without one are rejected
        let mut validation = Validation::new(self.algorithm);
        // Override the library's 60 second default leeway
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde::Serialize;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify() {
        let issuer = TokenIssuer::new(SECRET);
        let user_id = Uuid::new_v4();

        let token = issuer.issue(user_id).expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = issuer.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.exp - claims.iat, 8 * 60 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer
            .issue_with_ttl(Uuid::new_v4(), Duration::hours(-2))
            .expect("Failed to issue token");

        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_expiry_has_no_grace_window() {
        let issuer = TokenIssuer::new(SECRET);

        // Thirty seconds past exp must already be too late
        let token = issuer
            .issue_with_ttl(Uuid::new_v4(), Duration::seconds(-30))
            .expect("Failed to issue token");

        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let other = TokenIssuer::new(b"another_secret_at_least_32_bytes!!");

        let token = issuer
            .issue(Uuid::new_v4())
            .expect("Failed to issue token");

        let result = other.verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let issuer = TokenIssuer::new(SECRET);

        let token_a = issuer
            .issue(Uuid::new_v4())
            .expect("Failed to issue token");
        let token_b = issuer
            .issue(Uuid::new_v4())
            .expect("Failed to issue token");

        // Splice b's payload onto a's signature
        let parts_a: Vec<&str> = token_a.split('.').collect();
        let parts_b: Vec<&str> = token_b.split('.').collect();
        let forged = format!("{}.{}.{}", parts_a[0], parts_b[1], parts_a[2]);

        let result = issuer.verify(&forged);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_wrong_algorithm_is_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let claims = Claims::new(Uuid::new_v4(), Duration::hours(1));

        // Same secret, but signed with HS384
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_token_without_exp_is_rejected() {
        #[derive(Debug, Serialize, Deserialize)]
        struct NoExpiry {
            #[serde(rename = "userId")]
            user_id: Uuid,
            iat: i64,
        }

        let issuer = TokenIssuer::new(SECRET);
        let claims = NoExpiry {
            user_id: Uuid::new_v4(),
            iat: chrono::Utc::now().timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let issuer = TokenIssuer::new(SECRET);

        let result = issuer.verify("not.a.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
