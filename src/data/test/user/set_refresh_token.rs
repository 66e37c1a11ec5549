use super::*;

/// Tests storing and clearing the refresh token.
///
/// Storing overwrites any previous token; clearing removes it, which is what
/// invalidates a session on logout.
///
/// Expected: Ok with token persisted, then removed
#[tokio::test]
async fn stores_and_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_refresh_token(user.id, Some("token-1")).await?;
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some("token-1"));

    repo.set_refresh_token(user.id, Some("token-2")).await?;
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some("token-2"));

    repo.set_refresh_token(user.id, None).await?;
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.refresh_token.is_none());

    Ok(())
}
