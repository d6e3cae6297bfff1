use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Gender;
use crate::domain::user::models::PersonName;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::GenderError;
use crate::user::errors::PersonNameError;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterUserRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    state
        .auth_service
        .create_account(body.try_into_command()?)
        .await
        .map_err(|e| {
            if let UserError::CreationFailed(ref detail) = e {
                tracing::warn!(error = %detail, "User registration failed");
            }
            ApiError::from(e)
        })
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterResponseData {
                    message: "User created successfully".to_string(),
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterUserRequest {
    name: String,
    surname: String,
    email: String,
    password: String,
    weight: f64,
    gender: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid name: {0}")]
    Name(PersonNameError),

    #[error("Invalid surname: {0}")]
    Surname(PersonNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Gender(#[from] GenderError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseRegisterRequestError> {
        let name = PersonName::new(self.name).map_err(ParseRegisterRequestError::Name)?;
        let surname = PersonName::new(self.surname).map_err(ParseRegisterRequestError::Surname)?;
        let email = EmailAddress::new(self.email)?;
        let gender = Gender::new(&self.gender)?;

        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::EmptyPassword);
        }

        Ok(CreateUserCommand::new(
            name,
            surname,
            email,
            self.password,
            self.weight,
            gender,
        ))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
}
