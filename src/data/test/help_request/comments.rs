use super::*;

/// Tests appending and reading comments.
///
/// Expected: Ok with comments returned oldest first
#[tokio::test]
async fn appends_and_orders_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_help_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let commenter = factory::user::create_user(db).await?;
    let request = factory::help_request::create_help_request(db, owner.id).await?;

    let repo = HelpRequestRepository::new(db);
    repo.add_comment(request.id, commenter.id, "I can help on Saturday".to_string())
        .await?;
    repo.add_comment(request.id, owner.id, "Saturday works".to_string())
        .await?;

    let comments = repo.comments_for(request.id).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "I can help on Saturday");
    assert_eq!(comments[0].user_id, commenter.id);
    assert_eq!(comments[1].text, "Saturday works");

    Ok(())
}
