use chrono::Utc;

use super::test_config;
use crate::{
    model::user::{Role, User},
    service::auth::AuthService,
};

fn sample_user() -> User {
    User {
        id: 7,
        username: "dana".to_string(),
        email: "dana@example.com".to_string(),
        full_name: "Dana Example".to_string(),
        password_hash: String::new(),
        avatar: None,
        cover_image: None,
        bio: None,
        skills: Vec::new(),
        causes_supported: Vec::new(),
        total_hours: 0.0,
        points: 0,
        role: Role::User,
        refresh_token: None,
        reset_token: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// The stored hash must never equal the submitted plaintext, and two hashes
/// of the same password must differ because the salt is fresh each time.
#[test]
fn hash_never_equals_plaintext() {
    let config = test_config();
    let auth = AuthService::new(&config);

    let first = auth.hash_password("hunter2").unwrap();
    let second = auth.hash_password("hunter2").unwrap();

    assert_ne!(first, "hunter2");
    assert_ne!(first, second);
}

#[test]
fn verifies_correct_password_only() {
    let config = test_config();
    let auth = AuthService::new(&config);

    let hash = auth.hash_password("hunter2").unwrap();

    assert!(auth.verify_password("hunter2", &hash).unwrap());
    assert!(!auth.verify_password("wrong", &hash).unwrap());
}

/// Access tokens decode back to the claims they were issued with.
#[test]
fn access_token_carries_identity_claims() {
    let config = test_config();
    let auth = AuthService::new(&config);

    let token = auth.issue_access_token(&sample_user()).unwrap();
    let claims = auth.decode_access_token(&token).unwrap();

    assert_eq!(claims.sub, 7);
    assert_eq!(claims.username, "dana");
    assert_eq!(claims.role, "user");
}

/// An access token must not validate as a refresh token; the two are signed
/// with different secrets.
#[test]
fn token_kinds_are_not_interchangeable() {
    let config = test_config();
    let auth = AuthService::new(&config);

    let access = auth.issue_access_token(&sample_user()).unwrap();
    assert!(auth.decode_refresh_token(&access).is_err());

    let refresh = auth.issue_refresh_token(7).unwrap();
    assert!(auth.decode_access_token(&refresh).is_err());
    assert_eq!(auth.decode_refresh_token(&refresh).unwrap().sub, 7);
}
