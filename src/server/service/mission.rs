use sea_orm::DatabaseConnection;

use crate::server::{
    data::mission::MissionRepository,
    error::AppError,
    model::mission::{CreateMissionParams, FlyParams, Mission, MissionRow},
};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a mission across its two fragments.
    pub async fn create(&self, params: CreateMissionParams) -> Result<Mission, AppError> {
        let repo = MissionRepository::new(self.db);

        let mission = repo.create(params).await?;

        tracing::info!(mission_id = mission.mission_id, "Mission added");

        Ok(mission)
    }

    pub async fn get_rows(&self) -> Result<Vec<MissionRow>, AppError> {
        let repo = MissionRepository::new(self.db);

        Ok(repo.get_rows().await?)
    }

    pub async fn fly(&self, params: FlyParams) -> Result<(), AppError> {
        let repo = MissionRepository::new(self.db);

        repo.add_fly(params).await?;

        Ok(())
    }
}
