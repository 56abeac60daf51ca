use sea_orm::DatabaseConnection;

use crate::server::{
    data::maintenance::MaintenanceRepository,
    error::AppError,
    model::maintenance::{
        AssignMaintenanceParams, CreateMaintenanceParams, Maintenance, MaxAvgDowntimeRow,
        RemovedMaintenance,
    },
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMaintenanceParams) -> Result<Maintenance, AppError> {
        let repo = MaintenanceRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Moves a maintenance record to another aircraft.
    pub async fn assign(&self, params: AssignMaintenanceParams) -> Result<(), AppError> {
        let repo = MaintenanceRepository::new(self.db);
        let maintenance_id = params.maintenance_id;

        if repo.assign_aircraft(params).await? == 0 {
            return Err(AppError::NotFound(format!(
                "Maintenance record {} not found",
                maintenance_id
            )));
        }

        Ok(())
    }

    /// Removes a maintenance record together with all damage of its aircraft.
    pub async fn remove(&self, maintenance_id: i32) -> Result<RemovedMaintenance, AppError> {
        let repo = MaintenanceRepository::new(self.db);

        let removed = repo.delete_with_damage(maintenance_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Maintenance record {} not found", maintenance_id))
        })?;

        tracing::info!(
            maintenance_id,
            aircraft_id = %removed.aircraft_id,
            damage_removed = removed.damage_removed,
            "Maintenance record removed"
        );

        Ok(removed)
    }

    /// Maximum over aircraft of their average downtime; `None` without maintenance.
    pub async fn max_avg_downtime(&self) -> Result<MaxAvgDowntimeRow, AppError> {
        let repo = MaintenanceRepository::new(self.db);

        let row = repo.max_avg_downtime().await?;

        Ok(row.unwrap_or(MaxAvgDowntimeRow {
            max_avg_downtime: None,
        }))
    }
}
