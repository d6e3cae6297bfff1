use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by an access token.
///
/// Deliberately concrete: the only custom claim is the user identifier, wire-
/// named `userId`, alongside the registered `exp` and `iat` pair. Decoding is
/// strict in the sense that a token missing any of these fields is rejected;
/// unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user.
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds).
    pub iat: i64,
}

impl Claims {
    /// Build claims for a user with a lifetime of `ttl` from now.
    pub fn new(user_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}
