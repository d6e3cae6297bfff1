use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for registration and credential verification.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create a new account: hash the password, persist the credential record.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `CreationFailed` - Any other hashing or persistence failure
    async fn create_account(&self, command: CreateUserCommand) -> Result<(), UserError>;

    /// Verify an email/password pair and return the matching identity.
    ///
    /// The email is matched exactly as submitted; no case folding. The caller
    /// passes the returned identity to the token issuer.
    ///
    /// # Errors
    /// * `NotFound` - No account with this email
    /// * `InvalidPassword` - Password does not match the stored hash
    /// * `Unknown` - Verification infrastructure failed
    ///
    /// `NotFound` and `InvalidPassword` must collapse to one generic outcome
    /// at the boundary.
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError>;
}

/// Port for user profile operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Update an existing user's profile with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DuplicateEmail` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Replace the user's password with a freshly hashed one.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn change_password(&self, id: &UserId, new_password: &str) -> Result<(), UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage, atomically insert-or-conflict.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email uniqueness constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address, exact match.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Update an existing user's profile fields in storage.
    ///
    /// Does not touch the password hash.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DuplicateEmail` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Replace the stored password hash for a user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
