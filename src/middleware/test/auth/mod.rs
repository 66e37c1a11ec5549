use axum::http::{header, HeaderMap};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    config::Config,
    error::{auth::AuthError, AppError},
    middleware::auth::{cookie_value, extract_token, AuthGuard},
    model::user::User,
    service::auth::AuthService,
    state::AppState,
};

mod extract;
mod require;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        access_token_secret: "access-secret".to_string(),
        refresh_token_secret: "refresh-secret".to_string(),
        access_token_expiry_minutes: 15,
        refresh_token_expiry_days: 7,
        media_upload_url: "http://localhost:9000/upload".to_string(),
    }
}
