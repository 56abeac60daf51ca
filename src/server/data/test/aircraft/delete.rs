use super::*;

/// Tests removing an existing aircraft.
///
/// Verifies that the aircraft disappears from the join and that its crew assignments and
/// damage records go with it.
///
/// Expected: Ok(1) and no dependent rows left
#[tokio::test]
async fn deletes_existing_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let crew = factory::crew::create_crew(db).await?;
    factory::helpers::create_operate(db, &aircraft.aircraft_id, crew.crew_id).await?;
    factory::helpers::create_damage(db, &aircraft.aircraft_id, "canopy").await?;

    let repo = AircraftRepository::new(db);
    let deleted = repo.delete(&aircraft.aircraft_id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_rows().await?.is_empty());
    assert_eq!(entity::prelude::Operate::find().count(db).await?, 0);
    assert_eq!(entity::prelude::AircraftDamage::find().count(db).await?, 0);
    // Crew members are not owned by the aircraft.
    assert_eq!(entity::prelude::Crew::find().count(db).await?, 1);

    Ok(())
}

/// Tests removing an aircraft ID that does not exist.
///
/// Expected: Ok(0) and existing aircraft untouched
#[tokio::test]
async fn returns_zero_for_unknown_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::aircraft::create_aircraft(db).await?;

    let deleted = AircraftRepository::new(db).delete("NOPE").await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::Aircraft::find().count(db).await?, 1);

    Ok(())
}

/// Tests that removing an aircraft clears the fragments it alone joined to.
///
/// Verifies that the same aircraft can be added again after removal instead of failing on
/// the leftover model and armament keys.
///
/// Expected: Ok(1), no fragments left, and a successful re-add
#[tokio::test]
async fn removes_fragments_so_aircraft_can_be_added_again() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AircraftRepository::new(db);
    repo.create(params("A1", 1990, "Saab")).await?;

    let deleted = repo.delete("A1").await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::AircraftModel::find().count(db).await?, 0);
    assert_eq!(entity::prelude::AircraftArmament::find().count(db).await?, 0);

    let readded = repo.create(params("A1", 1990, "Saab")).await?;
    assert_eq!(readded.model, Some("Raptor".to_string()));
    assert_eq!(repo.get_rows().await?.len(), 1);

    Ok(())
}

/// Tests removing an aircraft whose fragments another aircraft still joins to.
///
/// Expected: Ok(1) with the shared model and armament fragments retained
#[tokio::test]
async fn keeps_fragments_still_joined_by_another_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AircraftRepository::new(db);
    repo.create(params("A1", 1990, "Saab")).await?;
    entity::aircraft::ActiveModel {
        aircraft_id: ActiveValue::Set("A2".to_string()),
        year_introduced: ActiveValue::Set(1990),
        manufacturer: ActiveValue::Set("Saab".to_string()),
    }
    .insert(db)
    .await?;

    let deleted = repo.delete("A1").await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::AircraftModel::find().count(db).await?, 1);
    assert_eq!(entity::prelude::AircraftArmament::find().count(db).await?, 1);

    let rows = repo.get_rows().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].model.as_deref(), Some("Raptor"));

    Ok(())
}
