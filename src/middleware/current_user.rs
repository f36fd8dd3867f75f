use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, state::AppState};

pub const USER_ID_HEADER: &str = "x-user-id";

/// User on whose behalf the request acts.
///
/// Read from the `X-User-Id` header. Requests without it act as the
/// configured default user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(CurrentUser {
                user_id: state.default_user_id,
            });
        };

        let user_id = header
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<i32>().ok())
            .ok_or_else(|| AppError::BadRequest("Cabecera X-User-Id inválida".into()))?;

        Ok(CurrentUser { user_id })
    }
}
