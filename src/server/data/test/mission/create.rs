use super::*;

/// Tests adding a mission.
///
/// Verifies that the weather fragment is written and the mission is reassembled from both
/// fragments.
///
/// Expected: Ok with the weather attached
#[tokio::test]
async fn creates_mission_with_weather() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mission = MissionRepository::new(db)
        .create(params(11, "Nevada"))
        .await?;

    assert_eq!(mission.mission_id, 11);
    assert_eq!(mission.weather.as_deref(), Some("Overcast"));
    assert_eq!(mission.outcome, Some(MissionOutcome::Failure));
    assert_eq!(entity::prelude::MissionWeather::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a failed identity insert rolls back the weather fragment.
///
/// Expected: Err(UniqueConstraintViolation) and no weather for the new location
#[tokio::test]
async fn rolls_back_weather_when_identity_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::mission::create_mission(db).await?;

    let result = MissionRepository::new(db)
        .create(params(existing.mission_id, "Arctic"))
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    let weather = entity::prelude::MissionWeather::find()
        .filter(entity::mission_weather::Column::MissionLocation.eq("Arctic"))
        .count(db)
        .await?;
    assert_eq!(weather, 0);

    Ok(())
}

/// Tests adding a second mission at the same place and date.
///
/// Expected: Err(UniqueConstraintViolation) on the shared weather fragment
#[tokio::test]
async fn rejects_second_mission_sharing_location_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MissionRepository::new(db);
    repo.create(params(21, "Nevada")).await?;

    let result = repo.create(params(22, "Nevada")).await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Mission::find().count(db).await?, 1);

    Ok(())
}
