use super::*;

/// Tests lookup by username.
///
/// Expected: Ok(Some) when the username matches
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("carol")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username_or_email("carol", "").await?;

    assert_eq!(found.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests lookup by email when the username does not match.
///
/// Expected: Ok(Some) when the email matches
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("someone-else", "carol@example.com")
        .await?;

    assert_eq!(found.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests lookup with no matching user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("ghost", "ghost@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
