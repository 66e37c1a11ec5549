use super::*;

/// Tests recording a peer verdict.
///
/// Expected: Ok with the verdict visible and attributed to the peer
#[tokio::test]
async fn records_verdict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, log) = factory::helpers::create_log_with_dependencies(db, 3.0).await?;
    let peer = factory::user::create_user(db).await?;

    let repo = VolunteerLogRepository::new(db);
    repo.add_verification(log.id, peer.id, VerificationStatus::Approved)
        .await?;

    let verdicts = repo.verifications_for(log.id).await?;
    assert_eq!(verdicts.len(), 1);
    assert_eq!(verdicts[0].user_id, peer.id);
    assert_eq!(verdicts[0].status, "approved");

    assert!(repo.has_verification_from(log.id, peer.id).await?);

    Ok(())
}

/// Tests that only approved verdicts count toward the approval total.
///
/// Expected: Ok with rejected verdicts excluded from the count
#[tokio::test]
async fn counts_only_approvals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, log) = factory::helpers::create_log_with_dependencies(db, 3.0).await?;
    let approver = factory::user::create_user(db).await?;
    let rejecter = factory::user::create_user(db).await?;

    let repo = VolunteerLogRepository::new(db);
    repo.add_verification(log.id, approver.id, VerificationStatus::Approved)
        .await?;
    repo.add_verification(log.id, rejecter.id, VerificationStatus::Rejected)
        .await?;

    assert_eq!(repo.count_approvals(log.id).await?, 1);
    assert_eq!(repo.verifications_for(log.id).await?.len(), 2);

    Ok(())
}

/// Tests the one-directional verified flag.
///
/// Expected: Ok with the flag raised and persisted
#[tokio::test]
async fn sets_verified_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volunteer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, log) = factory::helpers::create_log_with_dependencies(db, 3.0).await?;

    let repo = VolunteerLogRepository::new(db);
    repo.set_verified(log.id).await?;

    let stored = repo.get_by_id(log.id).await?.unwrap();
    assert!(stored.verified);

    Ok(())
}
