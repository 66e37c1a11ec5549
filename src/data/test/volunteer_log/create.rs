use super::*;

/// Tests creating an hours claim.
///
/// Expected: Ok with the log unverified and carrying no verdicts
#[tokio::test]
async fn creates_unverified_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = factory::helpers::create_event_with_creator(db).await?;

    let repo = VolunteerLogRepository::new(db);
    let log = repo.create(user.id, event.id, 4.5).await?;

    assert_eq!(log.user_id, user.id);
    assert_eq!(log.event_id, event.id);
    assert_eq!(log.hours, 4.5);
    assert!(!log.verified);
    assert!(repo.verifications_for(log.id).await?.is_empty());

    Ok(())
}

/// Tests that duplicate claims for the same event are allowed.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_duplicate_claims_for_same_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = factory::helpers::create_event_with_creator(db).await?;

    let repo = VolunteerLogRepository::new(db);
    repo.create(user.id, event.id, 2.0).await?;
    repo.create(user.id, event.id, 3.0).await?;

    assert_eq!(repo.get_by_user(user.id).await?.len(), 2);

    Ok(())
}

/// Tests the foreign key constraint on the event reference.
///
/// Expected: Err(DbErr) when the event does not exist
#[tokio::test]
async fn fails_for_nonexistent_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = VolunteerLogRepository::new(db);
    let result = repo.create(user.id, 999999, 4.0).await;

    assert!(result.is_err());

    Ok(())
}
