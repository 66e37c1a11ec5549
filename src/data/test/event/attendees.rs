use super::*;

/// Tests adding attendees and reading the set back.
///
/// Expected: Ok with membership visible through all accessors
#[tokio::test]
async fn adds_and_reads_attendees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, event) = factory::helpers::create_event_with_creator(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = EventRepository::new(db);
    repo.add_attendee(event.id, creator.id).await?;
    repo.add_attendee(event.id, other.id).await?;

    assert_eq!(repo.count_attendees(event.id).await?, 2);
    assert!(repo.is_attending(event.id, creator.id).await?);
    assert!(repo.is_attending(event.id, other.id).await?);

    let ids = repo.attendee_ids(event.id).await?;
    assert!(ids.contains(&creator.id));
    assert!(ids.contains(&other.id));

    Ok(())
}

/// Tests the composite primary key on the attendee set.
///
/// A duplicate insert for the same (event, user) pair must fail at the store
/// level, which is what makes a racing double-join harmless.
///
/// Expected: Err(DbErr) on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_membership_at_store_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = factory::helpers::create_event_with_creator(db).await?;

    let repo = EventRepository::new(db);
    repo.add_attendee(event.id, user.id).await?;

    let result = repo.add_attendee(event.id, user.id).await;
    assert!(result.is_err());

    assert_eq!(repo.count_attendees(event.id).await?, 1);

    Ok(())
}

/// Tests removing an attendee.
///
/// Expected: Ok with membership gone
#[tokio::test]
async fn removes_attendee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = factory::helpers::create_event_with_creator(db).await?;

    let repo = EventRepository::new(db);
    repo.add_attendee(event.id, user.id).await?;
    repo.remove_attendee(event.id, user.id).await?;

    assert!(!repo.is_attending(event.id, user.id).await?);
    assert_eq!(repo.count_attendees(event.id).await?, 0);

    Ok(())
}
