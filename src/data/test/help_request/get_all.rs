use super::*;

/// Tests filtering by urgency level.
///
/// Expected: Ok with only matching requests
#[tokio::test]
async fn filters_by_urgency_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_help_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::help_request::HelpRequestFactory::new(db, user.id)
        .urgency_level("urgent")
        .build()
        .await?;
    factory::help_request::HelpRequestFactory::new(db, user.id)
        .urgency_level("low")
        .build()
        .await?;

    let repo = HelpRequestRepository::new(db);
    let requests = repo
        .get_all(HelpRequestFilter {
            urgency_level: Some("urgent".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].urgency_level, "urgent");

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Ok with only matching requests
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_help_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::help_request::HelpRequestFactory::new(db, user.id)
        .status("resolved")
        .build()
        .await?;
    factory::help_request::HelpRequestFactory::new(db, user.id)
        .status("open")
        .build()
        .await?;

    let repo = HelpRequestRepository::new(db);
    let requests = repo
        .get_all(HelpRequestFilter {
            status: Some("resolved".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].status, "resolved");

    Ok(())
}
