use crate::config::Config;

mod auth;

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
