use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access token was found in the request.
    ///
    /// Neither the `accessToken` cookie nor the `Authorization` header carried
    /// a token. Results in a 401 Unauthorized response.
    #[error("Unauthorized request")]
    MissingToken,

    /// The access token failed signature or expiry validation, or the user it
    /// referenced no longer exists. Results in a 401 Unauthorized response.
    #[error("Invalid access token")]
    InvalidToken,

    /// Login was attempted with a wrong password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid user credentials")]
    InvalidCredentials,

    /// The refresh token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// The refresh token was valid but did not match the one persisted on the
    /// user record, meaning it was rotated away or revoked by a logout.
    /// Results in a 401 Unauthorized response.
    #[error("Refresh token is expired or used")]
    RefreshTokenReused,

    /// The password reset token failed validation or was already consumed.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    /// The acting user is not the owner of the record being mutated.
    ///
    /// Results in a 403 Forbidden response with the provided message.
    #[error("{0}")]
    Forbidden(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For reset token failures
/// - 401 Unauthorized - For missing/invalid tokens and bad credentials
/// - 403 Forbidden - For ownership violations
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidResetToken => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        };

        let body = ErrorDto::new(status.as_u16(), self.to_string());

        (status, Json(body)).into_response()
    }
}
