use super::*;

/// Tests recording a flight.
///
/// Expected: Ok with the flight stored as given
#[tokio::test]
async fn records_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::crew::create_crew(db).await?;
    let mission = factory::mission::create_mission(db).await?;

    let fly = MissionRepository::new(db)
        .add_fly(FlyParams {
            crew_id: crew.crew_id,
            mission_id: mission.mission_id,
            squadron_id: 5,
        })
        .await?;

    assert_eq!(fly.crew_id, crew.crew_id);
    assert_eq!(fly.mission_id, mission.mission_id);
    assert_eq!(fly.squadron_id, 5);

    Ok(())
}

/// Tests recording a flight for a mission that does not exist.
///
/// Expected: Err(ForeignKeyConstraintViolation)
#[tokio::test]
async fn rejects_unknown_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::crew::create_crew(db).await?;

    let result = MissionRepository::new(db)
        .add_fly(FlyParams {
            crew_id: crew.crew_id,
            mission_id: 999_999,
            squadron_id: 1,
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
