use super::*;

/// Tests logging the same task twice.
///
/// Expected: Ok for both and two `performed` rows
#[tokio::test]
async fn allows_duplicate_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;
    let maintenance = factory::maintenance::create_maintenance(db, &aircraft.aircraft_id).await?;
    let mechanic = factory::mechanic::create_mechanic(db).await?;

    let repo = MechanicRepository::new(db);
    let task = AssignTaskParams {
        mechanic_id: mechanic.mechanic_id,
        maintenance_id: maintenance.maintenance_id,
        working_hours: Some(3),
    };
    repo.assign_task(task.clone()).await?;
    let second = repo.assign_task(task).await?;

    assert_eq!(second.working_hours, Some(3));
    assert_eq!(entity::prelude::Performed::find().count(db).await?, 2);

    Ok(())
}

/// Tests logging work against a maintenance record that does not exist.
///
/// Expected: Err(ForeignKeyConstraintViolation)
#[tokio::test]
async fn rejects_unknown_maintenance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mechanic = factory::mechanic::create_mechanic(db).await?;

    let result = MechanicRepository::new(db)
        .assign_task(AssignTaskParams {
            mechanic_id: mechanic.mechanic_id,
            maintenance_id: 999_999,
            working_hours: None,
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
