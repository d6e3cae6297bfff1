use thiserror::Error;

/// Errors from password hashing and verification.
///
/// A wrong password is not an error; `verify` reports that as `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
