use super::*;

/// Tests finding a controller by CID.
///
/// Expected: Ok with the matching controller
#[tokio::test]
async fn finds_controller_by_cid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ControllerFactory::new(db)
        .cid(1357924)
        .first_name("Jordan")
        .last_name("Meyer")
        .build()
        .await?;

    let repo = ControllerRepository::new(db);
    let controller = repo.find_by_cid(1357924).await?.unwrap();

    assert_eq!(controller.cid, 1357924);
    assert_eq!(controller.first_name, "Jordan");
    assert_eq!(controller.last_name, "Meyer");

    Ok(())
}

/// Tests finding a CID that is not on the roster.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_cid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ControllerRepository::new(db);
    let controller = repo.find_by_cid(1357924).await?;

    assert!(controller.is_none());

    Ok(())
}
