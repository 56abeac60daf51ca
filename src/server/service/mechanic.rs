use sea_orm::DatabaseConnection;

use crate::server::{
    data::mechanic::MechanicRepository,
    error::AppError,
    model::mechanic::{
        AssignTaskParams, CreateMechanicParams, Mechanic, MechanicRow, StatusCountRow,
        WorkingHoursRow,
    },
};

pub struct MechanicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MechanicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a mechanic across its three fragments.
    pub async fn create(&self, params: CreateMechanicParams) -> Result<Mechanic, AppError> {
        let repo = MechanicRepository::new(self.db);

        let mechanic = repo.create(params).await?;

        tracing::info!(mechanic_id = mechanic.mechanic_id, "Mechanic added");

        Ok(mechanic)
    }

    pub async fn get_rows(&self) -> Result<Vec<MechanicRow>, AppError> {
        let repo = MechanicRepository::new(self.db);

        Ok(repo.get_rows().await?)
    }

    /// Mechanic with the most logged hours, `None` when nothing has been logged.
    pub async fn get_max_working_hours(&self) -> Result<Option<WorkingHoursRow>, AppError> {
        let repo = MechanicRepository::new(self.db);

        Ok(repo.get_max_working_hours().await?)
    }

    pub async fn count_by_status(&self) -> Result<Vec<StatusCountRow>, AppError> {
        let repo = MechanicRepository::new(self.db);

        Ok(repo.count_by_status().await?)
    }

    pub async fn assign_task(&self, params: AssignTaskParams) -> Result<(), AppError> {
        let repo = MechanicRepository::new(self.db);

        repo.assign_task(params).await?;

        Ok(())
    }
}
