use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PersonName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonNameError {
    #[error("Name must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Gender validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenderError {
    #[error("Unsupported gender: {0} (expected 'male' or 'female')")]
    Unsupported(String),
}

/// Top-level error for all user-related operations.
///
/// `NotFound` and `InvalidPassword` are distinct kinds here so services and
/// tests can tell them apart; the HTTP boundary collapses both into one
/// generic authentication failure so callers cannot probe which emails exist.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] PersonNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid gender: {0}")]
    InvalidGender(#[from] GenderError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Account creation failed: {0}")]
    CreationFailed(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
