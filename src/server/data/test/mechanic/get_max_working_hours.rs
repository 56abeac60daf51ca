use super::*;

/// Tests finding the mechanic with the most logged hours.
///
/// Verifies that hours are summed across tasks before comparing.
///
/// Expected: Ok(Some) naming the mechanic with 5 + 7 = 12 hours
#[tokio::test]
async fn returns_mechanic_with_most_hours() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let maintenance = factory::maintenance::create_maintenance(db, &aircraft.aircraft_id).await?;
    let steady = factory::mechanic::MechanicFactory::new(db)
        .name("Steady")
        .build()
        .await?;
    let burst = factory::mechanic::MechanicFactory::new(db)
        .name("Burst")
        .build()
        .await?;
    for hours in [5, 7] {
        factory::helpers::create_performed(
            db,
            steady.mechanic_id,
            maintenance.maintenance_id,
            Some(hours),
        )
        .await?;
    }
    factory::helpers::create_performed(db, burst.mechanic_id, maintenance.maintenance_id, Some(10))
        .await?;

    let top = MechanicRepository::new(db)
        .get_max_working_hours()
        .await?
        .unwrap();

    assert_eq!(top.name.as_deref(), Some("Steady"));
    assert_eq!(top.total_hours, Some(12));

    Ok(())
}

/// Tests the query with no logged work.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_logged_work() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::mechanic::create_mechanic(db).await?;

    let top = MechanicRepository::new(db).get_max_working_hours().await?;

    assert!(top.is_none());

    Ok(())
}
