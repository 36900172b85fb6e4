use super::*;

/// Tests overwriting a session's fields from its VATUSA record.
///
/// Every field the record is authoritative for is replaced; the local
/// milestone, cross-reference, and submitted flag stay as they were.
///
/// Expected: Ok with replaced fields and preserved local fields
#[tokio::test]
async fn overwrites_authoritative_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = TrainingSessionFactory::new(db)
        .milestone("T2")
        .vatusa_id(Some(998877))
        .submitted(true)
        .notes(Some("Original local notes.".to_string()))
        .build()
        .await?;

    let start = Utc.with_ymd_and_hms(2026, 3, 15, 20, 30, 0).unwrap();

    let repo = TrainingSessionRepository::new(db);
    let session = repo
        .update_from_vatusa(UpdateFromVatusaParam {
            id: seeded.id,
            position: "ORD_APP".to_string(),
            location: 2,
            start_time: start,
            end_time: start + chrono::Duration::minutes(135),
            duration: "02:15".to_string(),
            movements: Some(30),
            score: Some(2),
            notes: Some("Rewritten upstream notes.".to_string()),
        })
        .await?;

    assert_eq!(session.id, seeded.id);
    assert_eq!(session.position, "ORD_APP");
    assert_eq!(session.location, 2);
    assert_eq!(session.start_time, start);
    assert_eq!(session.end_time, start + chrono::Duration::minutes(135));
    assert_eq!(session.duration, "02:15");
    assert_eq!(session.movements, Some(30));
    assert_eq!(session.score, Some(2));
    assert_eq!(session.notes, Some("Rewritten upstream notes.".to_string()));
    assert_eq!(session.milestone, "T2");
    assert_eq!(session.vatusa_id, Some(998877));
    assert!(session.submitted);

    Ok(())
}

/// Tests updating a session id that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn errors_when_session_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2026, 3, 15, 20, 30, 0).unwrap();

    let repo = TrainingSessionRepository::new(db);
    let result = repo
        .update_from_vatusa(UpdateFromVatusaParam {
            id: 9999,
            position: "ORD_APP".to_string(),
            location: 2,
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            duration: "01:00".to_string(),
            movements: None,
            score: None,
            notes: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
