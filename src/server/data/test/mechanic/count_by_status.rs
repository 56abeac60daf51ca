use super::*;

/// Tests counting mechanics per availability status.
///
/// Expected: Ok with Free counted twice and Occupied once
#[tokio::test]
async fn counts_each_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for status in [
        AvailabilityStatus::Free,
        AvailabilityStatus::Occupied,
        AvailabilityStatus::Free,
    ] {
        factory::mechanic::MechanicFactory::new(db)
            .availability_status(Some(status))
            .build()
            .await?;
    }

    let counts = MechanicRepository::new(db).count_by_status().await?;

    let free = counts
        .iter()
        .find(|c| c.availability_status == Some(AvailabilityStatus::Free))
        .map(|c| c.mechanic_count);
    let occupied = counts
        .iter()
        .find(|c| c.availability_status == Some(AvailabilityStatus::Occupied))
        .map(|c| c.mechanic_count);
    assert_eq!(counts.len(), 2);
    assert_eq!(free, Some(2));
    assert_eq!(occupied, Some(1));

    Ok(())
}

/// Tests counting with no mechanics.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_mechanics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let counts = MechanicRepository::new(db).count_by_status().await?;

    assert!(counts.is_empty());

    Ok(())
}
