use super::*;

/// Tests finding crew who flew every mission.
///
/// Verifies that a member missing a single mission is excluded.
///
/// Expected: Ok with only the member who flew all three missions
#[tokio::test]
async fn returns_crew_who_flew_every_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let veteran = factory::crew::create_crew(db).await?;
    let rookie = factory::crew::create_crew(db).await?;
    let mut missions = Vec::new();
    for _ in 0..3 {
        missions.push(factory::mission::create_mission(db).await?);
    }
    for mission in &missions {
        factory::helpers::create_fly(db, veteran.crew_id, mission.mission_id, 1).await?;
    }
    for mission in &missions[..2] {
        factory::helpers::create_fly(db, rookie.crew_id, mission.mission_id, 1).await?;
    }
    // Repeat flights do not count twice.
    factory::helpers::create_fly(db, rookie.crew_id, missions[0].mission_id, 3).await?;

    let veterans = CrewRepository::new(db).get_veterans().await?;

    assert_eq!(veterans.len(), 1);
    assert_eq!(veterans[0].crew_id, veteran.crew_id);
    assert_eq!(veterans[0].name, veteran.name);

    Ok(())
}

/// Tests the veteran query with no missions on record.
///
/// Verifies that every crew member trivially qualifies.
///
/// Expected: Ok with every crew member
#[tokio::test]
async fn every_crew_member_qualifies_without_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::crew::create_crew(db).await?;
    factory::crew::create_crew(db).await?;

    let veterans = CrewRepository::new(db).get_veterans().await?;

    assert_eq!(veterans.len(), 2);

    Ok(())
}
