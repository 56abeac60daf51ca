use super::*;

/// Tests moving a maintenance record to another aircraft.
///
/// Verifies that the aircraft reference is overwritten.
///
/// Expected: Ok(1) and the record now points at the new aircraft
#[tokio::test]
async fn reassigns_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::aircraft::create_aircraft(db).await?;
    let second = factory::aircraft::create_aircraft(db).await?;
    let maintenance = factory::maintenance::create_maintenance(db, &first.aircraft_id).await?;

    let repo = MaintenanceRepository::new(db);
    let updated = repo
        .assign_aircraft(AssignMaintenanceParams {
            maintenance_id: maintenance.maintenance_id,
            aircraft_id: second.aircraft_id.clone(),
        })
        .await?;

    assert_eq!(updated, 1);
    let stored = repo.get_by_id(maintenance.maintenance_id).await?.unwrap();
    assert_eq!(stored.aircraft_id, second.aircraft_id);

    Ok(())
}

/// Tests assigning a maintenance ID that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;

    let updated = MaintenanceRepository::new(db)
        .assign_aircraft(AssignMaintenanceParams {
            maintenance_id: 999_999,
            aircraft_id: aircraft.aircraft_id,
        })
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}

/// Tests assigning a record to an aircraft that does not exist.
///
/// Expected: Err(ForeignKeyConstraintViolation) and the record unchanged
#[tokio::test]
async fn rejects_unknown_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let maintenance = factory::maintenance::create_maintenance(db, &aircraft.aircraft_id).await?;

    let repo = MaintenanceRepository::new(db);
    let result = repo
        .assign_aircraft(AssignMaintenanceParams {
            maintenance_id: maintenance.maintenance_id,
            aircraft_id: "GHOST".to_string(),
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    let stored = repo.get_by_id(maintenance.maintenance_id).await?.unwrap();
    assert_eq!(stored.aircraft_id, aircraft.aircraft_id);

    Ok(())
}
