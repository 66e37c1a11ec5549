use super::*;

/// Tests joining and leaving the helper set.
///
/// Expected: Ok with membership reflected after each step
#[tokio::test]
async fn adds_and_removes_helpers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_help_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let helper = factory::user::create_user(db).await?;
    let request = factory::help_request::create_help_request(db, owner.id).await?;

    let repo = HelpRequestRepository::new(db);

    assert!(!repo.is_helper(request.id, helper.id).await?);

    repo.add_helper(request.id, helper.id).await?;
    assert!(repo.is_helper(request.id, helper.id).await?);
    assert_eq!(repo.helper_ids(request.id).await?, vec![helper.id]);

    repo.remove_helper(request.id, helper.id).await?;
    assert!(!repo.is_helper(request.id, helper.id).await?);

    Ok(())
}
