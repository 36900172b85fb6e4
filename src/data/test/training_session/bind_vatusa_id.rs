use super::*;

/// Tests binding a session to a VATUSA record.
///
/// Verifies that the cross-reference is set and the session is marked
/// submitted in one write.
///
/// Expected: Ok with vatusa_id and submitted persisted
#[tokio::test]
async fn binds_session_to_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = create_training_session(db).await?;
    assert!(seeded.vatusa_id.is_none());
    assert!(!seeded.submitted);

    let repo = TrainingSessionRepository::new(db);
    repo.bind_vatusa_id(seeded.id, 998877).await?;

    let session = repo.find_by_vatusa_id(998877).await?.unwrap();
    assert_eq!(session.id, seeded.id);
    assert_eq!(session.vatusa_id, Some(998877));
    assert!(session.submitted);

    Ok(())
}

/// Tests that binding one session leaves the others untouched.
///
/// Expected: Ok with the second session still unreconciled
#[tokio::test]
async fn leaves_other_sessions_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = create_unsynced_sessions(db, 2).await?;

    let repo = TrainingSessionRepository::new(db);
    repo.bind_vatusa_id(seeded[0].id, 998877).await?;

    let sessions = repo.get_all().await?;
    let other = sessions.iter().find(|s| s.id == seeded[1].id).unwrap();
    assert_eq!(other.vatusa_id, None);
    assert!(!other.submitted);

    Ok(())
}

/// Tests that the unique index rejects binding a second session to the
/// same record.
///
/// Expected: Err from the update with the first binding intact
#[tokio::test]
async fn rejects_duplicate_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = create_unsynced_sessions(db, 2).await?;

    let repo = TrainingSessionRepository::new(db);
    repo.bind_vatusa_id(seeded[0].id, 998877).await?;

    let result = repo.bind_vatusa_id(seeded[1].id, 998877).await;
    assert!(result.is_err());

    let bound = repo.find_by_vatusa_id(998877).await?.unwrap();
    assert_eq!(bound.id, seeded[0].id);

    let sessions = repo.get_all().await?;
    let other = sessions.iter().find(|s| s.id == seeded[1].id).unwrap();
    assert_eq!(other.vatusa_id, None);
    assert!(!other.submitted);

    Ok(())
}
