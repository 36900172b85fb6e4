use super::*;

/// Tests fetching initials from an empty roster.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_roster_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ControllerRepository::new(db);
    let initials = repo.get_all_operating_initials().await?;

    assert!(initials.is_empty());

    Ok(())
}

/// Tests fetching every assigned initials pair.
///
/// Expected: Ok with all pairs in alphabetical order
#[tokio::test]
async fn returns_initials_alphabetically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for initials in ["ZZ", "AB", "MN"] {
        ControllerFactory::new(db)
            .operating_initials(initials)
            .build()
            .await?;
    }

    let repo = ControllerRepository::new(db);
    let initials = repo.get_all_operating_initials().await?;

    assert_eq!(initials, vec!["AB", "MN", "ZZ"]);

    Ok(())
}
