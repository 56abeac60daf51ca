use super::*;

/// Tests inserting demo rows and listing them back.
///
/// Expected: Ok with rows ordered by ID
#[tokio::test]
async fn lists_inserted_rows_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_demo_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DemoRepository::new(db);
    repo.insert(InsertDemoParams {
        id: 2,
        name: None,
    })
    .await?;
    repo.insert(InsertDemoParams {
        id: 1,
        name: Some("alpha".to_string()),
    })
    .await?;

    let rows = repo.get_all().await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].name.as_deref(), Some("alpha"));
    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[1].name, None);

    Ok(())
}

/// Tests inserting a duplicate ID.
///
/// Expected: Err(UniqueConstraintViolation)
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_demo_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DemoRepository::new(db);
    repo.insert(InsertDemoParams {
        id: 1,
        name: None,
    })
    .await?;

    let result = repo
        .insert(InsertDemoParams {
            id: 1,
            name: None,
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
