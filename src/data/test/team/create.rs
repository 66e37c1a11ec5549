use super::*;

/// Tests that creating a team enrolls the creator as its first member.
///
/// Expected: Ok with the creator in the member set
#[tokio::test]
async fn enrolls_creator_as_first_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo.create(create_params("Green Hands", user.id)).await?;

    assert_eq!(team.name, "Green Hands");
    assert_eq!(team.created_by, user.id);
    assert!(repo.is_member(team.id, user.id).await?);
    assert_eq!(repo.member_ids(team.id).await?, vec![user.id]);

    Ok(())
}

/// Tests the unique constraint on team names.
///
/// Expected: Err(DbErr) on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    repo.create(create_params("Green Hands", user.id)).await?;

    let result = repo.create(create_params("Green Hands", user.id)).await;
    assert!(result.is_err());

    Ok(())
}
