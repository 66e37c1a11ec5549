use super::*;

/// Tests creating a new event.
///
/// Expected: Ok with fields persisted and the derived status stored as text
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.create(create_params(user.id)).await?;

    assert_eq!(event.title, "Beach Cleanup");
    assert_eq!(event.category, "environment");
    assert_eq!(event.created_by, user.id);
    assert_eq!(event.status, "upcoming");
    assert_eq!(event.visibility, "public");
    assert!(event.max_attendees.is_none());

    Ok(())
}

/// Tests the foreign key constraint on the creator.
///
/// Expected: Err(DbErr) when the creator id does not exist
#[tokio::test]
async fn fails_for_nonexistent_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo.create(create_params(999999)).await;

    assert!(result.is_err());

    Ok(())
}
