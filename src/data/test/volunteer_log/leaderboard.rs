use super::*;

/// Tests ordering and filtering of the leaderboard aggregation.
///
/// Only verified logs participate; totals are per user and ordered
/// descending.
///
/// Expected: Ok with verified totals in descending order
#[tokio::test]
async fn orders_verified_totals_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, event) = factory::helpers::create_event_with_creator(db).await?;
    let second = factory::user::create_user(db).await?;
    let third = factory::user::create_user(db).await?;

    factory::volunteer_log::create_verified_log(db, creator.id, event.id, 10.0).await?;
    factory::volunteer_log::create_verified_log(db, second.id, event.id, 20.0).await?;
    factory::volunteer_log::create_verified_log(db, third.id, event.id, 5.0).await?;
    // Unverified hours never reach the leaderboard, no matter how large.
    factory::volunteer_log::create_volunteer_log(db, third.id, event.id, 100.0).await?;

    let repo = VolunteerLogRepository::new(db);
    let entries = repo.leaderboard(10).await?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].user_id, second.id);
    assert_eq!(entries[0].total_hours, 20.0);
    assert_eq!(entries[1].user_id, creator.id);
    assert_eq!(entries[2].user_id, third.id);
    assert_eq!(entries[2].total_hours, 5.0);

    Ok(())
}

/// Tests that multiple verified logs for one user are summed.
///
/// Expected: Ok with one entry carrying the summed hours
#[tokio::test]
async fn sums_multiple_logs_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = factory::helpers::create_event_with_creator(db).await?;
    factory::volunteer_log::create_verified_log(db, user.id, event.id, 4.0).await?;
    factory::volunteer_log::create_verified_log(db, user.id, event.id, 6.0).await?;

    let repo = VolunteerLogRepository::new(db);
    let entries = repo.leaderboard(10).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, user.id);
    assert_eq!(entries[0].total_hours, 10.0);

    Ok(())
}

/// Tests the entry cap.
///
/// Expected: Ok with at most `limit` entries
#[tokio::test]
async fn caps_entries_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, event) = factory::helpers::create_event_with_creator(db).await?;
    factory::volunteer_log::create_verified_log(db, creator.id, event.id, 1.0).await?;
    for _ in 0..3 {
        let user = factory::user::create_user(db).await?;
        factory::volunteer_log::create_verified_log(db, user.id, event.id, 2.0).await?;
    }

    let repo = VolunteerLogRepository::new(db);
    let entries = repo.leaderboard(2).await?;

    assert_eq!(entries.len(), 2);

    Ok(())
}
