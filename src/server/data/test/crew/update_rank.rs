use super::*;

/// Tests changing a crew member's rank.
///
/// Expected: Ok(1) and the new rank persisted
#[tokio::test]
async fn updates_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::crew::CrewFactory::new(db)
        .rank("Lieutenant")
        .build()
        .await?;

    let repo = CrewRepository::new(db);
    let updated = repo
        .update_rank(UpdateRankParams {
            crew_id: crew.crew_id,
            rank: "Commander".to_string(),
        })
        .await?;

    assert_eq!(updated, 1);
    let stored = repo.get_by_id(crew.crew_id).await?.unwrap();
    assert_eq!(stored.rank.as_deref(), Some("Commander"));

    Ok(())
}

/// Tests changing the rank of a crew ID that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CrewRepository::new(db)
        .update_rank(UpdateRankParams {
            crew_id: 999_999,
            rank: "Commander".to_string(),
        })
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
