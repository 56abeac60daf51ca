use super::*;

/// Tests removing a maintenance record together with its aircraft's damage.
///
/// Verifies that only damage belonging to the record's aircraft is removed and that other
/// maintenance on that aircraft survives.
///
/// Expected: Ok(Some) reporting two damage rows removed
#[tokio::test]
async fn removes_record_and_damage_of_its_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let damaged = factory::aircraft::create_aircraft(db).await?;
    let other = factory::aircraft::create_aircraft(db).await?;
    factory::helpers::create_damage(db, &damaged.aircraft_id, "wing").await?;
    factory::helpers::create_damage(db, &damaged.aircraft_id, "flap").await?;
    factory::helpers::create_damage(db, &other.aircraft_id, "gear").await?;
    let target = factory::maintenance::create_maintenance(db, &damaged.aircraft_id).await?;
    let sibling = factory::maintenance::create_maintenance(db, &damaged.aircraft_id).await?;

    let repo = MaintenanceRepository::new(db);
    let removed = repo.delete_with_damage(target.maintenance_id).await?.unwrap();

    assert_eq!(removed.maintenance_id, target.maintenance_id);
    assert_eq!(removed.aircraft_id, damaged.aircraft_id);
    assert_eq!(removed.damage_removed, 2);

    assert!(repo.get_by_id(target.maintenance_id).await?.is_none());
    assert!(repo.get_by_id(sibling.maintenance_id).await?.is_some());

    let damaged_left = entity::prelude::AircraftDamage::find()
        .filter(entity::aircraft_damage::Column::AircraftId.eq(damaged.aircraft_id.as_str()))
        .count(db)
        .await?;
    let other_left = entity::prelude::AircraftDamage::find()
        .filter(entity::aircraft_damage::Column::AircraftId.eq(other.aircraft_id.as_str()))
        .count(db)
        .await?;
    assert_eq!(damaged_left, 0);
    assert_eq!(other_left, 1);

    Ok(())
}

/// Tests removing a maintenance ID that does not exist.
///
/// Verifies that no damage is touched when the record is missing.
///
/// Expected: Ok(None) and all damage retained
#[tokio::test]
async fn leaves_damage_when_record_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    factory::helpers::create_damage(db, &aircraft.aircraft_id, "wing").await?;

    let removed = MaintenanceRepository::new(db)
        .delete_with_damage(999_999)
        .await?;

    assert!(removed.is_none());
    assert_eq!(entity::prelude::AircraftDamage::find().count(db).await?, 1);

    Ok(())
}
