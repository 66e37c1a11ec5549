//! Credential and token service.
//!
//! Password hashing uses argon2 with a per-hash salt; access, refresh, and
//! reset tokens are HS256 JWTs signed with separate secrets. Refresh and reset
//! tokens are additionally persisted on the user row by their callers, which
//! is what makes rotation and single-use semantics possible.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User id.
    pub sub: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    /// Expiration time as a UTC timestamp.
    pub exp: usize,
}

/// Claims carried by refresh and reset tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// User id.
    pub sub: i32,
    /// Expiration time as a UTC timestamp.
    pub exp: usize,
}

pub struct AuthService<'a> {
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Hashes a password for storage.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-format argon2 hash
    /// - `Err(AppError::InternalError)` - Hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a stored hash.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            AppError::InternalError(format!("Stored password hash is malformed: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Issues a short-lived access token for the user.
    pub fn issue_access_token(&self, user: &User) -> Result<String, AppError> {
        let exp = (Utc::now() + Duration::minutes(self.config.access_token_expiry_minutes))
            .timestamp() as usize;

        let claims = AccessClaims {
            sub: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.access_token_secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to encode access token: {}", e)))
    }

    /// Issues a long-lived refresh token for the user.
    pub fn issue_refresh_token(&self, user_id: i32) -> Result<String, AppError> {
        let exp =
            (Utc::now() + Duration::days(self.config.refresh_token_expiry_days)).timestamp() as usize;

        let claims = RefreshClaims { sub: user_id, exp };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.refresh_token_secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to encode refresh token: {}", e)))
    }

    /// Issues a one-hour password reset token for the user.
    pub fn issue_reset_token(&self, user_id: i32) -> Result<String, AppError> {
        let exp = (Utc::now() + Duration::hours(1)).timestamp() as usize;

        let claims = RefreshClaims { sub: user_id, exp };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.refresh_token_secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to encode reset token: {}", e)))
    }

    /// Validates an access token's signature and expiry.
    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.config.access_token_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }

    /// Validates a refresh token's signature and expiry.
    pub fn decode_refresh_token(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.config.refresh_token_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidRefreshToken)
    }

    /// Validates a reset token's signature and expiry.
    pub fn decode_reset_token(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.config.refresh_token_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidResetToken)
    }
}
