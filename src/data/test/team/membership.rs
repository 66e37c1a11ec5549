use super::*;

/// Tests joining and leaving a team.
///
/// Expected: Ok with membership reflected after each step
#[tokio::test]
async fn adds_and_removes_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let member = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, owner.id).await?;

    let repo = TeamRepository::new(db);

    assert!(!repo.is_member(team.id, member.id).await?);

    repo.add_member(team.id, member.id).await?;
    assert!(repo.is_member(team.id, member.id).await?);

    repo.remove_member(team.id, member.id).await?;
    assert!(!repo.is_member(team.id, member.id).await?);

    Ok(())
}

/// Tests listing the teams a user belongs to.
///
/// Expected: Ok with only the user's teams
#[tokio::test]
async fn lists_teams_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let member = factory::user::create_user(db).await?;
    let joined = factory::team::create_team(db, owner.id).await?;
    factory::team::create_team(db, owner.id).await?;

    let repo = TeamRepository::new(db);
    repo.add_member(joined.id, member.id).await?;

    let teams = repo.teams_for_user(member.id).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, joined.id);

    Ok(())
}

/// Tests the empty case for a user with no memberships.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_no_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let teams = repo.teams_for_user(user.id).await?;

    assert!(teams.is_empty());

    Ok(())
}
