use super::*;

/// Tests looking up the session bound to a VATUSA record.
///
/// Expected: Ok with the bound session
#[tokio::test]
async fn finds_bound_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = TrainingSessionFactory::new(db)
        .vatusa_id(Some(998877))
        .submitted(true)
        .build()
        .await?;

    let repo = TrainingSessionRepository::new(db);
    let session = repo.find_by_vatusa_id(998877).await?.unwrap();

    assert_eq!(session.id, seeded.id);
    assert_eq!(session.vatusa_id, Some(998877));

    Ok(())
}

/// Tests looking up a record id no session is bound to.
///
/// An unreconciled session exists, but it carries no cross-reference and
/// must not be returned.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_when_no_session_is_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_training_session(db).await?;

    let repo = TrainingSessionRepository::new(db);
    let session = repo.find_by_vatusa_id(998877).await?;

    assert!(session.is_none());

    Ok(())
}
