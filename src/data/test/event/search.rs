use super::*;

/// Tests the text query against titles.
///
/// Expected: Ok with only events whose title or description matches
#[tokio::test]
async fn matches_title_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::event::EventFactory::new(db, user.id)
        .title("River Cleanup")
        .build()
        .await?;
    factory::event::EventFactory::new(db, user.id)
        .title("Food Drive")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (events, total) = repo
        .search(EventSearchFilter {
            query: Some("Cleanup".to_string()),
            page: 1,
            limit: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "River Cleanup");

    Ok(())
}

/// Tests offset pagination and the total count.
///
/// Expected: Ok with page-sized chunks and an accurate total
#[tokio::test]
async fn paginates_with_total_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..5 {
        factory::event::create_event(db, user.id).await?;
    }

    let repo = EventRepository::new(db);

    let (first, total) = repo
        .search(EventSearchFilter {
            page: 1,
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 5);
    assert_eq!(first.len(), 2);

    let (last, _) = repo
        .search(EventSearchFilter {
            page: 3,
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Tests the lower-bound date filter.
///
/// Expected: Ok with only events on or after the requested date
#[tokio::test]
async fn filters_by_date_lower_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let soon = factory::event::EventFactory::new(db, user.id)
        .date(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let later = factory::event::EventFactory::new(db, user.id)
        .date(Utc::now() + Duration::days(10))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (events, total) = repo
        .search(EventSearchFilter {
            date_from: Some(Utc::now() + Duration::days(5)),
            page: 1,
            limit: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(events[0].id, later.id);
    assert_ne!(events[0].id, soon.id);

    Ok(())
}
