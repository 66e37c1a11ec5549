use super::*;

fn update_params() -> UpdateAccountParams {
    UpdateAccountParams {
        full_name: "Updated Name".to_string(),
        email: "updated@example.com".to_string(),
        bio: Some("Helping out".to_string()),
        skills: vec!["cooking".to_string()],
        causes_supported: vec!["environment".to_string()],
        role: None,
    }
}

/// Tests updating profile fields.
///
/// Expected: Ok with all provided fields replaced
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.update_account(user.id, update_params()).await?;

    assert_eq!(updated.full_name, "Updated Name");
    assert_eq!(updated.email, "updated@example.com");
    assert_eq!(updated.bio.as_deref(), Some("Helping out"));
    assert_eq!(updated.skills, vec!["cooking".to_string()]);
    assert_eq!(updated.causes_supported, vec!["environment".to_string()]);

    Ok(())
}

/// Tests that a None role preserves the existing role.
///
/// Expected: Ok with role unchanged
#[tokio::test]
async fn preserves_role_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).role("admin").build().await?;
    let repo = UserRepository::new(db);

    let updated = repo.update_account(user.id, update_params()).await?;

    assert_eq!(updated.role, Role::Admin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update_account(999999, update_params()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
