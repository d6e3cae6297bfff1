use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiResponseBody;
use crate::inbound::http::router::AppState;

/// Extension type to store the verified caller identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that verifies bearer tokens and adds the caller to request extensions.
///
/// Every rejection returns the same response. A missing header, a malformed
/// header, a bad signature and an expired token must be indistinguishable
/// to the caller; the cause is only logged server-side.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::debug!("Request without usable bearer token");
        unauthorized()
    })?;

    let claims = state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.user_id),
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponseBody::new_error(
            StatusCode::UNAUTHORIZED,
            "Unauthorized".to_string(),
        )),
    )
        .into_response()
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req
        .headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let token = value.strip_prefix("Bearer ")?;

    if token.is_empty() {
        return None;
    }

    Some(token)
}
