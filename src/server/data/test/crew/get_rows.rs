use super::*;

/// Tests listing crew with their flights and aircraft assignments.
///
/// Verifies that a member with two flights and one assignment appears twice and that a
/// member with no associations still appears once.
///
/// Expected: Ok with three rows
#[tokio::test]
async fn lists_crew_with_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::crew::create_crew(db).await?;
    let idle = factory::crew::create_crew(db).await?;
    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let first = factory::mission::create_mission(db).await?;
    let second = factory::mission::create_mission(db).await?;
    factory::helpers::create_fly(db, busy.crew_id, first.mission_id, 1).await?;
    factory::helpers::create_fly(db, busy.crew_id, second.mission_id, 2).await?;
    factory::helpers::create_operate(db, &aircraft.aircraft_id, busy.crew_id).await?;

    let rows = CrewRepository::new(db).get_rows().await?;

    let busy_rows: Vec<_> = rows.iter().filter(|r| r.crew_id == busy.crew_id).collect();
    assert_eq!(busy_rows.len(), 2);
    assert!(busy_rows
        .iter()
        .all(|r| r.aircraft_id.as_deref() == Some(aircraft.aircraft_id.as_str())));
    assert_eq!(busy_rows[0].mission_id, Some(first.mission_id));
    assert_eq!(busy_rows[1].squadron_id, Some(2));

    let idle_rows: Vec<_> = rows.iter().filter(|r| r.crew_id == idle.crew_id).collect();
    assert_eq!(idle_rows.len(), 1);
    assert_eq!(idle_rows[0].mission_id, None);
    assert_eq!(idle_rows[0].aircraft_id, None);

    Ok(())
}
