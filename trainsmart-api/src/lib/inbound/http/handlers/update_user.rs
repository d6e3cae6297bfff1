use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Gender;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for updating a user (raw JSON). Every field is
/// optional; passwords go through the dedicated password endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        // Validation happens here - errors are automatically converted via #[from]
        let name = self.name.map(PersonName::new).transpose()?;

        let surname = self.surname.map(PersonName::new).transpose()?;

        let email = self.email.map(EmailAddress::new).transpose()?;

        let gender = self.gender.as_deref().map(Gender::new).transpose()?;

        Ok(UpdateUserCommand {
            name,
            surname,
            email,
            weight: self.weight,
            gender,
        })
    }
}

/// Response body for user update operations. `created_at` serializes the
/// same way here as on reads, so both verbs show one textual form.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub weight: f64,
    pub gender: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            surname: user.surname.as_str().to_string(),
            email: user.email.as_str().to_string(),
            weight: user.weight,
            gender: user.gender.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    // Parse user ID and request at HTTP boundary - errors automatically converted
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, user.into()))
}
