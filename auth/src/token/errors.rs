use thiserror::Error;

/// Errors from token issuance and verification.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to issue token: {0}")]
    IssuanceFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}
