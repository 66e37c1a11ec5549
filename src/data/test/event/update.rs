use super::*;

/// Tests partial updates.
///
/// Expected: Ok with provided fields replaced and others untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_creator(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event.id,
            UpdateEventParams {
                title: Some("Renamed".to_string()),
                max_attendees: Some(25),
                status: Some(EventStatus::Ongoing),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.max_attendees, Some(25));
    assert_eq!(updated.status, "ongoing");
    assert_eq!(updated.location, event.location);
    assert_eq!(updated.category, event.category);

    Ok(())
}

/// Tests updating an event that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo
        .update(
            999999,
            UpdateEventParams {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
