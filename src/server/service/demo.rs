use sea_orm::DatabaseConnection;

use crate::server::{
    data::demo::DemoRepository,
    error::AppError,
    model::demo::{DemoRecord, InsertDemoParams, RenameDemoParams},
};

pub struct DemoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<DemoRecord>, AppError> {
        let repo = DemoRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Drops and recreates the demo table, discarding its rows.
    pub async fn initiate(&self) -> Result<(), AppError> {
        let repo = DemoRepository::new(self.db);

        repo.reset().await?;

        tracing::info!("Demo table initiated");

        Ok(())
    }

    pub async fn insert(&self, params: InsertDemoParams) -> Result<DemoRecord, AppError> {
        let repo = DemoRepository::new(self.db);

        Ok(repo.insert(params).await?)
    }

    pub async fn rename(&self, params: RenameDemoParams) -> Result<(), AppError> {
        let repo = DemoRepository::new(self.db);
        let old_name = params.old_name.clone();

        if repo.rename(params).await? == 0 {
            return Err(AppError::NotFound(format!(
                "No demo row named '{}'",
                old_name
            )));
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = DemoRepository::new(self.db);

        Ok(repo.count().await?)
    }
}
