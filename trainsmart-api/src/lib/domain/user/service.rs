use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Registration and credential verification.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new authentication service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn create_account(&self, command: CreateUserCommand) -> Result<(), UserError> {
        // Hash password using auth library
        let password_hash = auth::password::hash(&command.password)
            .map_err(|e| UserError::CreationFailed(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            surname: command.surname,
            email: command.email,
            password_hash,
            weight: command.weight,
            gender: command.gender,
            created_at: Utc::now(),
        };
        let user_id = user.id;

        match self.repository.create(user).await {
            Ok(_) => {
                tracing::info!(user_id = %user_id, "User account created");
                Ok(())
            }
            // The conflict signal survives as-is; everything else becomes a
            // creation failure whose detail stays server-side
            Err(UserError::DuplicateEmail(email)) => Err(UserError::DuplicateEmail(email)),
            Err(other) => Err(UserError::CreationFailed(other.to_string())),
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        let is_valid = auth::password::verify(password, &user.password_hash)
            .map_err(|e| UserError::Unknown(format!("Password verification failed: {}", e)))?;

        if !is_valid {
            return Err(UserError::InvalidPassword);
        }

        Ok(user)
    }
}

/// Profile operations on existing users.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name {
            user.name = new_name;
        }

        if let Some(new_surname) = command.surname {
            user.surname = new_surname;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_weight) = command.weight {
            user.weight = new_weight;
        }

        if let Some(new_gender) = command.gender {
            user.gender = new_gender;
        }

        self.repository.update(user).await
    }

    async fn change_password(&self, id: &UserId, new_password: &str) -> Result<(), UserError> {
        let password_hash = auth::password::hash(new_password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        self.repository.update_password_hash(id, &password_hash).await?;

        tracing::info!(user_id = %id, "User password changed");
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }
}
