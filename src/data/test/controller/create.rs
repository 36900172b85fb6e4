use super::*;

/// Tests creating a controller on the roster.
///
/// Expected: Ok with all provided fields persisted
#[tokio::test]
async fn creates_controller_on_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ControllerRepository::new(db);
    let controller = repo
        .create(CreateControllerParam {
            cid: 1357924,
            first_name: "Jordan".to_string(),
            last_name: "Meyer".to_string(),
            operating_initials: "JM".to_string(),
        })
        .await?;

    assert_eq!(controller.cid, 1357924);
    assert_eq!(controller.first_name, "Jordan");
    assert_eq!(controller.last_name, "Meyer");
    assert_eq!(controller.operating_initials, "JM");

    Ok(())
}

/// Tests that the unique index rejects duplicate operating initials.
///
/// Expected: Err from the insert
#[tokio::test]
async fn rejects_duplicate_initials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ControllerFactory::new(db)
        .operating_initials("JM")
        .build()
        .await?;

    let repo = ControllerRepository::new(db);
    let result = repo
        .create(CreateControllerParam {
            cid: 1357924,
            first_name: "Jordan".to_string(),
            last_name: "Meyer".to_string(),
            operating_initials: "JM".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
