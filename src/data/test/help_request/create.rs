use super::*;

/// Tests creating a help request.
///
/// Expected: Ok with the request persisted and status `open`
#[tokio::test]
async fn creates_open_help_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_help_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = HelpRequestRepository::new(db);
    let request = repo
        .create(CreateHelpRequestParams {
            title: "Need groceries delivered".to_string(),
            description: "Weekly grocery run for an elderly neighbor".to_string(),
            urgency_level: UrgencyLevel::Urgent,
            created_by: user.id,
        })
        .await?;

    assert_eq!(request.title, "Need groceries delivered");
    assert_eq!(request.urgency_level, "urgent");
    assert_eq!(request.status, "open");
    assert_eq!(request.created_by, user.id);

    Ok(())
}
