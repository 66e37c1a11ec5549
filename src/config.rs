use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub cors_origin: String,

    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub access_token_expiry_minutes: i64,
    pub refresh_token_expiry_days: i64,

    pub media_upload_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            access_token_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("ACCESS_TOKEN_SECRET".to_string()))?,
            refresh_token_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("REFRESH_TOKEN_SECRET".to_string()))?,
            access_token_expiry_minutes: env_i64("ACCESS_TOKEN_EXPIRY_MINUTES", 15)?,
            refresh_token_expiry_days: env_i64("REFRESH_TOKEN_EXPIRY_DAYS", 7)?,
            media_upload_url: std::env::var("MEDIA_UPLOAD_URL")
                .map_err(|_| ConfigError::MissingEnvVar("MEDIA_UPLOAD_URL".to_string()))?,
        })
    }
}

fn env_i64(name: &str, default: i64) -> Result<i64, AppError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()).into()),
        Err(_) => Ok(default),
    }
}
