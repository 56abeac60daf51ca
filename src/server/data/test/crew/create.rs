use super::*;

/// Tests adding a crew member.
///
/// Expected: Ok with the member readable by ID
#[tokio::test]
async fn creates_crew_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrewRepository::new(db);
    let created = repo
        .create(CreateCrewParams {
            crew_id: 7,
            name: Some("Maverick".to_string()),
            role: Some("Pilot".to_string()),
            rank: Some("Captain".to_string()),
        })
        .await?;

    assert_eq!(repo.get_by_id(7).await?, Some(created));

    Ok(())
}

/// Tests adding a crew member with an ID already in use.
///
/// Expected: Err(UniqueConstraintViolation)
#[tokio::test]
async fn rejects_duplicate_crew_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::crew::create_crew(db).await?;

    let result = CrewRepository::new(db)
        .create(CreateCrewParams {
            crew_id: existing.crew_id,
            name: None,
            role: None,
            rank: None,
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
