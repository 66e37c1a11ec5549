use axum::http::{header, HeaderMap};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::AuthService,
    state::AppState,
};

/// Cookie carrying the access token for browser clients.
const ACCESS_TOKEN_COOKIE: &str = "accessToken";

pub struct AuthGuard<'a> {
    state: &'a AppState,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Authenticates the request and loads the acting user.
    ///
    /// Reads the access token from the `accessToken` cookie or the
    /// `Authorization: Bearer` header, validates it, and resolves the user it
    /// references. A token whose user no longer exists is treated the same as
    /// an invalid token.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(MissingToken))` - No token on the request
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token failed validation
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let Some(token) = extract_token(headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = AuthService::new(&self.state.config).decode_access_token(&token)?;

        let user_repo = UserRepository::new(&self.state.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}

/// Extracts the access token from request headers.
///
/// The cookie takes precedence over the bearer header, matching the contract
/// browser clients rely on.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = cookie_value(headers, ACCESS_TOKEN_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// Reads a named cookie from the `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        if let Some(value) = pair.strip_prefix(name) {
            if let Some(token) = value.strip_prefix('=') {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    None
}
