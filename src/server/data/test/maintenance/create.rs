use super::*;

/// Tests adding a maintenance record for an existing aircraft.
///
/// Expected: Ok with every attribute persisted as given
#[tokio::test]
async fn creates_maintenance_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;

    let repo = MaintenanceRepository::new(db);
    let created = repo
        .create(CreateMaintenanceParams {
            maintenance_id: 42,
            complexity_level: Some(ComplexityLevel::High),
            downtime_duration: Some(12),
            maintenance_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 9),
            parts: Some("hydraulic pump".to_string()),
            coordinate_x: 12.5,
            coordinate_y: -7.25,
            aircraft_id: aircraft.aircraft_id.clone(),
        })
        .await?;

    let stored = repo.get_by_id(42).await?.unwrap();
    assert_eq!(stored, created);
    assert_eq!(stored.complexity_level, Some(ComplexityLevel::High));
    assert_eq!(stored.aircraft_id, aircraft.aircraft_id);

    Ok(())
}

/// Tests adding maintenance for an aircraft that does not exist.
///
/// Expected: Err(ForeignKeyConstraintViolation)
#[tokio::test]
async fn rejects_unknown_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MaintenanceRepository::new(db)
        .create(CreateMaintenanceParams {
            maintenance_id: 1,
            complexity_level: None,
            downtime_duration: None,
            maintenance_date: None,
            parts: None,
            coordinate_x: 0.0,
            coordinate_y: 0.0,
            aircraft_id: "GHOST".to_string(),
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
