use super::*;

/// Tests that only the user's verified logs are summed.
///
/// Expected: Ok with unverified hours and other users' hours excluded
#[tokio::test]
async fn sums_only_verified_hours_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = factory::helpers::create_event_with_creator(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::volunteer_log::create_verified_log(db, user.id, event.id, 12.0).await?;
    factory::volunteer_log::create_verified_log(db, user.id, event.id, 8.0).await?;
    factory::volunteer_log::create_volunteer_log(db, user.id, event.id, 50.0).await?;
    factory::volunteer_log::create_verified_log(db, other.id, event.id, 30.0).await?;

    let repo = VolunteerLogRepository::new(db);

    assert_eq!(repo.total_verified_hours(user.id).await?, 20.0);
    assert_eq!(repo.total_verified_hours(other.id).await?, 30.0);

    Ok(())
}

/// Tests the empty case.
///
/// Expected: Ok(0.0) for a user with no verified logs
#[tokio::test]
async fn returns_zero_for_no_verified_logs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = VolunteerLogRepository::new(db);

    assert_eq!(repo.total_verified_hours(user.id).await?, 0.0);

    Ok(())
}
