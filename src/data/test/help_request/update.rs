use super::*;

/// Tests partial updates of descriptive fields.
///
/// Expected: Ok with provided fields replaced and others untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_help_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let request = factory::help_request::create_help_request(db, user.id).await?;

    let repo = HelpRequestRepository::new(db);
    let updated = repo
        .update(
            request.id,
            UpdateHelpRequestParams {
                title: Some("Updated title".to_string()),
                urgency_level: Some(UrgencyLevel::Low),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Updated title");
    assert_eq!(updated.urgency_level, "low");
    assert_eq!(updated.description, request.description);
    assert_eq!(updated.status, "open");

    Ok(())
}

/// Tests the status transition helper.
///
/// Expected: Ok with the status column replaced
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_help_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let request = factory::help_request::create_help_request(db, user.id).await?;

    let repo = HelpRequestRepository::new(db);
    repo.set_status(request.id, "in-progress").await?;

    let stored = repo.get_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, "in-progress");

    Ok(())
}
