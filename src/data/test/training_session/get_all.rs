use super::*;

/// Tests fetching sessions from an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainingSessionRepository::new(db);
    let sessions = repo.get_all().await?;

    assert!(sessions.is_empty());

    Ok(())
}

/// Tests fetching every stored session.
///
/// Verifies that all rows come back as domain models, ordered by id.
///
/// Expected: Ok with all three sessions in id order
#[tokio::test]
async fn returns_all_sessions_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = create_unsynced_sessions(db, 3).await?;

    let repo = TrainingSessionRepository::new(db);
    let sessions = repo.get_all().await?;

    assert_eq!(sessions.len(), 3);
    let ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
    let seeded_ids: Vec<i32> = seeded.iter().map(|s| s.id).collect();
    assert_eq!(ids, seeded_ids);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    Ok(())
}
