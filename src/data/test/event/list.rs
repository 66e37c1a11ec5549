use super::*;

/// Tests id-cursor pagination in ascending order.
///
/// The cursor excludes the row it points at, so feeding the last id of one
/// page back in yields the following page with no overlap.
///
/// Expected: Ok with consecutive, non-overlapping pages
#[tokio::test]
async fn pages_forward_with_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..5 {
        factory::event::create_event(db, user.id).await?;
    }

    let repo = EventRepository::new(db);

    let first_page = repo
        .list(EventListFilter {
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(first_page.len(), 2);

    let cursor = first_page.last().map(|event| event.id);
    let second_page = repo
        .list(EventListFilter {
            limit: 2,
            cursor,
            ..Default::default()
        })
        .await?;
    assert_eq!(second_page.len(), 2);
    assert!(second_page[0].id > first_page[1].id);

    Ok(())
}

/// Tests descending cursor order.
///
/// Expected: Ok with ids strictly decreasing
#[tokio::test]
async fn orders_descending_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..3 {
        factory::event::create_event(db, user.id).await?;
    }

    let repo = EventRepository::new(db);
    let events = repo
        .list(EventListFilter {
            limit: 10,
            descending: true,
            ..Default::default()
        })
        .await?;

    assert_eq!(events.len(), 3);
    assert!(events[0].id > events[1].id);
    assert!(events[1].id > events[2].id);

    Ok(())
}

/// Tests the category filter.
///
/// Expected: Ok with only events in the requested category
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::event::EventFactory::new(db, user.id)
        .category("education")
        .build()
        .await?;
    factory::event::EventFactory::new(db, user.id)
        .category("environment")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo
        .list(EventListFilter {
            category: Some("education".to_string()),
            limit: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, "education");

    Ok(())
}

/// Tests listing with an empty database.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn returns_empty_for_no_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let events = repo
        .list(EventListFilter {
            limit: 10,
            ..Default::default()
        })
        .await?;

    assert!(events.is_empty());

    Ok(())
}
