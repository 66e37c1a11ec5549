use super::*;

/// Tests substring matching on full names.
///
/// Expected: Ok with only the matching user
#[tokio::test]
async fn filters_by_full_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .full_name("Amelia Johnson")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .full_name("Bruno Keller")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search(UserSearchFilter {
            full_name: Some("Johnson".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].full_name, "Amelia Johnson");

    Ok(())
}

/// Tests matching users carrying any of the requested skills.
///
/// Expected: Ok with users matching at least one skill
#[tokio::test]
async fn filters_by_any_skill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::UserFactory::new(db)
        .skills(vec!["cooking"])
        .build()
        .await?;
    let driver = factory::user::UserFactory::new(db)
        .skills(vec!["driving"])
        .build()
        .await?;
    factory::user::UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search(UserSearchFilter {
            skills: vec!["cooking".to_string(), "driving".to_string()],
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = results.iter().map(|user| user.id).collect();
    assert_eq!(results.len(), 2);
    assert!(ids.contains(&cook.id));
    assert!(ids.contains(&driver.id));

    Ok(())
}

/// Tests the minimum-hours filter against the aggregate counter.
///
/// Expected: Ok with only users at or above the threshold
#[tokio::test]
async fn filters_by_minimum_hours() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let veteran = factory::user::UserFactory::new(db)
        .total_hours(30.0)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .total_hours(5.0)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search(UserSearchFilter {
            min_hours: Some(20.0),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, veteran.id);

    Ok(())
}
