use super::*;

/// Tests creating a new user with default counters.
///
/// Verifies that the repository stores the provided credentials and profile
/// fields and initializes the aggregate counters to zero.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("alice", "alice@example.com")).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.total_hours, 0.0);
    assert_eq!(user.points, 0);
    assert_eq!(user.role, Role::User);
    assert!(user.skills.is_empty());
    assert!(user.refresh_token.is_none());

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Expected: Err(DbErr) on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("alice", "alice@example.com")).await?;

    let result = repo.create(create_params("alice", "other@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the unique constraint on emails.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("alice", "alice@example.com")).await?;

    let result = repo.create(create_params("bob", "alice@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
