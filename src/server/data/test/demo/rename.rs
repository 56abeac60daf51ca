use super::*;

/// Tests renaming every row that carries a name.
///
/// Expected: Ok(2) with both matching rows renamed and the other untouched
#[tokio::test]
async fn renames_all_matching_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_demo_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DemoRepository::new(db);
    for (id, name) in [(1, "alpha"), (2, "beta"), (3, "alpha")] {
        repo.insert(InsertDemoParams {
            id,
            name: Some(name.to_string()),
        })
        .await?;
    }

    let updated = repo
        .rename(RenameDemoParams {
            old_name: "alpha".to_string(),
            new_name: "omega".to_string(),
        })
        .await?;

    assert_eq!(updated, 2);
    let names: Vec<_> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|r| r.name.unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["omega", "beta", "omega"]);

    Ok(())
}

/// Tests renaming a name no row carries.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_name_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_demo_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = DemoRepository::new(db)
        .rename(RenameDemoParams {
            old_name: "ghost".to_string(),
            new_name: "omega".to_string(),
        })
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
