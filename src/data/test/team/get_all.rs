use super::*;

/// Tests the type filter.
///
/// Expected: Ok with only teams of the requested type
#[tokio::test]
async fn filters_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::team::TeamFactory::new(db, user.id)
        .team_type("private")
        .build()
        .await?;
    factory::team::TeamFactory::new(db, user.id)
        .team_type("public")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_all(Some("private")).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team_type, "private");

    Ok(())
}

/// Tests alphabetical ordering by name.
///
/// Expected: Ok with teams sorted by name ascending
#[tokio::test]
async fn orders_teams_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::team::TeamFactory::new(db, user.id).name("Zebras").build().await?;
    factory::team::TeamFactory::new(db, user.id).name("Antelopes").build().await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_all(None).await?;

    assert_eq!(teams[0].name, "Antelopes");
    assert_eq!(teams[1].name, "Zebras");

    Ok(())
}
