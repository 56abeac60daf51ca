use super::*;

/// Tests finding roles held by more than five crew members.
///
/// Verifies that exactly five is not enough.
///
/// Expected: Ok with only the role held six times
#[tokio::test]
async fn returns_roles_above_five_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..6 {
        factory::crew::CrewFactory::new(db).role("Gunner").build().await?;
    }
    for _ in 0..5 {
        factory::crew::CrewFactory::new(db).role("Navigator").build().await?;
    }

    let roles = CrewRepository::new(db).get_excess_roles().await?;

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role.as_deref(), Some("Gunner"));
    assert_eq!(roles[0].crew_count, 6);

    Ok(())
}

/// Tests the query when no role is crowded.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_role_exceeds_five() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::crew::create_crew(db).await?;
    }

    let roles = CrewRepository::new(db).get_excess_roles().await?;

    assert!(roles.is_empty());

    Ok(())
}
