use super::*;

/// Tests listing mechanics with their logged tasks.
///
/// Verifies one row per task and a single row with no task for an idle mechanic.
///
/// Expected: Ok with three rows
#[tokio::test]
async fn lists_mechanics_with_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let first = factory::maintenance::create_maintenance(db, &aircraft.aircraft_id).await?;
    let second = factory::maintenance::create_maintenance(db, &aircraft.aircraft_id).await?;
    let busy = factory::mechanic::MechanicFactory::new(db)
        .name("Rooster")
        .build()
        .await?;
    let idle = factory::mechanic::create_mechanic(db).await?;
    factory::helpers::create_performed(db, busy.mechanic_id, first.maintenance_id, Some(4))
        .await?;
    factory::helpers::create_performed(db, busy.mechanic_id, second.maintenance_id, Some(2))
        .await?;

    let rows = MechanicRepository::new(db).get_rows().await?;

    let busy_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.mechanic_id == busy.mechanic_id)
        .collect();
    assert_eq!(busy_rows.len(), 2);
    assert_eq!(busy_rows[0].name.as_deref(), Some("Rooster"));
    assert_eq!(busy_rows[0].maintenance_id, Some(first.maintenance_id));
    assert_eq!(busy_rows[1].maintenance_id, Some(second.maintenance_id));

    let idle_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.mechanic_id == idle.mechanic_id)
        .collect();
    assert_eq!(idle_rows.len(), 1);
    assert_eq!(idle_rows[0].maintenance_id, None);
    assert_eq!(idle_rows[0].availability_status, Some(AvailabilityStatus::Free));

    Ok(())
}
