use super::*;

async fn state_with_user() -> Result<(AppState, entity::user::Model), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let state = AppState::new(db.clone(), reqwest::Client::new(), test_config());

    Ok((state, user))
}

/// Tests that a valid bearer token resolves to its user.
///
/// Expected: Ok with the authenticated user
#[tokio::test]
async fn accepts_valid_token() -> Result<(), DbErr> {
    let (state, entity) = state_with_user().await?;

    let user = User::from_entity(entity.clone());
    let token = AuthService::new(&state.config)
        .issue_access_token(&user)
        .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );

    let authenticated = AuthGuard::new(&state).require(&headers).await.unwrap();
    assert_eq!(authenticated.id, entity.id);
    assert_eq!(authenticated.username, entity.username);

    Ok(())
}

/// Tests the missing-token rejection.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), DbErr> {
    let (state, _) = state_with_user().await?;

    let result = AuthGuard::new(&state).require(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests rejection of a token that fails validation.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_garbage_token() -> Result<(), DbErr> {
    let (state, _) = state_with_user().await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        "Bearer not-a-real-token".parse().unwrap(),
    );

    let result = AuthGuard::new(&state).require(&headers).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests rejection of a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_signed_with_wrong_secret() -> Result<(), DbErr> {
    let (state, entity) = state_with_user().await?;

    let mut foreign_config = test_config();
    foreign_config.access_token_secret = "some-other-secret".to_string();

    let user = User::from_entity(entity);
    let token = AuthService::new(&foreign_config)
        .issue_access_token(&user)
        .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );

    let result = AuthGuard::new(&state).require(&headers).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests rejection of a token whose user no longer exists.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_for_deleted_user() -> Result<(), DbErr> {
    let (state, entity) = state_with_user().await?;

    let mut user = User::from_entity(entity);
    user.id = 999999;
    let token = AuthService::new(&state.config)
        .issue_access_token(&user)
        .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );

    let result = AuthGuard::new(&state).require(&headers).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
