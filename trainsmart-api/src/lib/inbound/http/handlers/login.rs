use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Single message for every credential failure. Unknown emails and wrong
/// passwords must be indistinguishable to the caller.
pub const INVALID_CREDENTIALS: &str = "Authentication failed. Invalid credentials.";

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let user = state
        .auth_service
        .authenticate(&body.email, &body.password)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) | UserError::InvalidPassword => {
                tracing::debug!(error = %e, "Login attempt rejected");
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            other => ApiError::from(other),
        })?;

    // Token issuance failure is a server fault, never a credential failure
    let token = state
        .token_issuer
        .issue(user.id.0)
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Authentication successful".to_string(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
