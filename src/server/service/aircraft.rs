use sea_orm::DatabaseConnection;

use crate::server::{
    data::{aircraft::AircraftRepository, damage::DamageRepository},
    error::AppError,
    model::aircraft::{
        Aircraft, AircraftRow, AssignCrewParams, CreateAircraftParams, CreateDamageParams,
    },
};

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an aircraft across its three fragments.
    pub async fn create(&self, params: CreateAircraftParams) -> Result<Aircraft, AppError> {
        let repo = AircraftRepository::new(self.db);

        let aircraft = repo.create(params).await?;

        tracing::info!(aircraft_id = %aircraft.aircraft_id, "Aircraft added");

        Ok(aircraft)
    }

    pub async fn get_rows(&self) -> Result<Vec<AircraftRow>, AppError> {
        let repo = AircraftRepository::new(self.db);

        Ok(repo.get_rows().await?)
    }

    /// Removes an aircraft; fails with `NotFound` when the ID does not exist.
    pub async fn remove(&self, aircraft_id: &str) -> Result<(), AppError> {
        let repo = AircraftRepository::new(self.db);

        if repo.delete(aircraft_id).await? == 0 {
            return Err(AppError::NotFound(format!(
                "Aircraft {} not found",
                aircraft_id
            )));
        }

        Ok(())
    }

    pub async fn add_damage(&self, params: CreateDamageParams) -> Result<(), AppError> {
        let repo = DamageRepository::new(self.db);

        repo.create(params).await?;

        Ok(())
    }

    /// Assigns a crew member to an aircraft. Repeating the call adds another row.
    pub async fn assign_crew(&self, params: AssignCrewParams) -> Result<(), AppError> {
        let repo = AircraftRepository::new(self.db);

        repo.assign_crew(params).await?;

        Ok(())
    }
}
