use sea_orm::DatabaseConnection;

use crate::server::{
    data::crew::CrewRepository,
    error::AppError,
    model::crew::{CreateCrewParams, Crew, CrewRow, RoleCountRow, UpdateRankParams, VeteranRow},
};

pub struct CrewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCrewParams) -> Result<Crew, AppError> {
        let repo = CrewRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn update_rank(&self, params: UpdateRankParams) -> Result<(), AppError> {
        let repo = CrewRepository::new(self.db);
        let crew_id = params.crew_id;

        if repo.update_rank(params).await? == 0 {
            return Err(AppError::NotFound(format!(
                "Crew member {} not found",
                crew_id
            )));
        }

        Ok(())
    }

    pub async fn get_rows(&self) -> Result<Vec<CrewRow>, AppError> {
        let repo = CrewRepository::new(self.db);

        Ok(repo.get_rows().await?)
    }

    pub async fn get_veterans(&self) -> Result<Vec<VeteranRow>, AppError> {
        let repo = CrewRepository::new(self.db);

        Ok(repo.get_veterans().await?)
    }

    pub async fn get_excess_roles(&self) -> Result<Vec<RoleCountRow>, AppError> {
        let repo = CrewRepository::new(self.db);

        Ok(repo.get_excess_roles().await?)
    }
}
