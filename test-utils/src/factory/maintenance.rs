use chrono::NaiveDate;
use entity::sea_orm_active_enums::ComplexityLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_key;

/// Factory for creating maintenance records assigned to an aircraft.
pub struct MaintenanceFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::maintenance::Model,
}

impl<'a> MaintenanceFactory<'a> {
    /// # Arguments
    /// - `db` - Database connection for inserting the record
    /// - `aircraft_id` - Aircraft the record is assigned to; must exist
    pub fn new(db: &'a DatabaseConnection, aircraft_id: impl Into<String>) -> Self {
        Self {
            db,
            entity: entity::maintenance::Model {
                maintenance_id: next_key(),
                complexity_level: Some(ComplexityLevel::Medium),
                downtime_duration: Some(10),
                maintenance_date: NaiveDate::from_ymd_opt(2024, 2, 1),
                parts: Some("Landing gear".to_string()),
                coordinate_x: 51.47,
                coordinate_y: -0.45,
                aircraft_id: aircraft_id.into(),
            },
        }
    }

    pub fn maintenance_id(mut self, maintenance_id: i32) -> Self {
        self.entity.maintenance_id = maintenance_id;
        self
    }

    pub fn downtime(mut self, downtime: Option<i32>) -> Self {
        self.entity.downtime_duration = downtime;
        self
    }

    pub fn complexity(mut self, complexity: Option<ComplexityLevel>) -> Self {
        self.entity.complexity_level = complexity;
        self
    }

    pub async fn build(self) -> Result<entity::maintenance::Model, DbErr> {
        entity::maintenance::ActiveModel {
            maintenance_id: ActiveValue::Set(self.entity.maintenance_id),
            complexity_level: ActiveValue::Set(self.entity.complexity_level),
            downtime_duration: ActiveValue::Set(self.entity.downtime_duration),
            maintenance_date: ActiveValue::Set(self.entity.maintenance_date),
            parts: ActiveValue::Set(self.entity.parts),
            coordinate_x: ActiveValue::Set(self.entity.coordinate_x),
            coordinate_y: ActiveValue::Set(self.entity.coordinate_y),
            aircraft_id: ActiveValue::Set(self.entity.aircraft_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a maintenance record for the given aircraft with default values.
pub async fn create_maintenance(
    db: &DatabaseConnection,
    aircraft_id: &str,
) -> Result<entity::maintenance::Model, DbErr> {
    MaintenanceFactory::new(db, aircraft_id).build().await
}
