use super::*;

/// Tests creating a session with every field provided.
///
/// This is the shape the sync run uses when importing a VATUSA record:
/// the session arrives already bound and submitted.
///
/// Expected: Ok with all provided fields persisted
#[tokio::test]
async fn creates_imported_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2026, 3, 14, 18, 0, 0).unwrap();

    let repo = TrainingSessionRepository::new(db);
    let session = repo
        .create(NewTrainingSessionParam {
            student_cid: 1300042,
            instructor_cid: 999999,
            position: "ORD_TWR".to_string(),
            location: 1,
            start_time: start,
            end_time: start + chrono::Duration::minutes(90),
            duration: "01:30".to_string(),
            movements: Some(24),
            score: Some(4),
            notes: Some("Imported from VATUSA.".to_string()),
            milestone: "UNK".to_string(),
            vatusa_id: Some(998877),
            submitted: true,
        })
        .await?;

    assert!(session.id > 0);
    assert_eq!(session.student_cid, 1300042);
    assert_eq!(session.instructor_cid, 999999);
    assert_eq!(session.position, "ORD_TWR");
    assert_eq!(session.location, 1);
    assert_eq!(session.start_time, start);
    assert_eq!(session.end_time, start + chrono::Duration::minutes(90));
    assert_eq!(session.duration, "01:30");
    assert_eq!(session.movements, Some(24));
    assert_eq!(session.score, Some(4));
    assert_eq!(session.notes, Some("Imported from VATUSA.".to_string()));
    assert_eq!(session.milestone, "UNK");
    assert_eq!(session.vatusa_id, Some(998877));
    assert!(session.submitted);

    Ok(())
}

/// Tests creating a session with the optional fields absent.
///
/// Expected: Ok with movements, score, notes, and vatusa_id stored as None
#[tokio::test]
async fn creates_session_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2026, 3, 14, 18, 0, 0).unwrap();

    let repo = TrainingSessionRepository::new(db);
    let session = repo
        .create(NewTrainingSessionParam {
            student_cid: 1300042,
            instructor_cid: 999999,
            position: "ORD_GND".to_string(),
            location: 0,
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            duration: "01:00".to_string(),
            movements: None,
            score: None,
            notes: None,
            milestone: "T1".to_string(),
            vatusa_id: None,
            submitted: false,
        })
        .await?;

    assert_eq!(session.movements, None);
    assert_eq!(session.score, None);
    assert_eq!(session.notes, None);
    assert_eq!(session.vatusa_id, None);
    assert!(!session.submitted);

    Ok(())
}
