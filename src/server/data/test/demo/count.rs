use super::*;

/// Tests counting demo rows.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_demo_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DemoRepository::new(db);
    for id in 1..=3 {
        repo.insert(InsertDemoParams { id, name: None }).await?;
    }

    assert_eq!(repo.count().await?, 3);

    Ok(())
}

/// Tests counting when the demo table was never created.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(DemoRepository::new(db).count().await.is_err());

    Ok(())
}
