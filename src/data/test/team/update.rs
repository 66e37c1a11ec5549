use super::*;

/// Tests partial updates.
///
/// Expected: Ok with provided fields replaced and others untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, user.id).await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(
            team.id,
            UpdateTeamParams {
                name: Some("Renamed".to_string()),
                team_type: Some(TeamType::Private),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.team_type, "private");
    assert_eq!(updated.description, team.description);

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .update(
            999999,
            UpdateTeamParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
