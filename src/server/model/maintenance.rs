use chrono::NaiveDate;
use entity::sea_orm_active_enums::ComplexityLevel;
use sea_orm::FromQueryResult;

use crate::{
    model::maintenance::{AddMaintenanceDto, AssignMaintenanceDto, MaxAvgDowntimeDto},
    server::{
        error::AppError,
        util::parse::{parse_optional_date, require, require_text},
    },
};

/// Maintenance record together with its aircraft assignment and repair-base coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Maintenance {
    pub maintenance_id: i32,
    pub complexity_level: Option<ComplexityLevel>,
    pub downtime_duration: Option<i32>,
    pub maintenance_date: Option<NaiveDate>,
    pub parts: Option<String>,
    pub coordinate_x: f64,
    pub coordinate_y: f64,
    pub aircraft_id: String,
}

impl Maintenance {
    pub fn from_entity(entity: entity::maintenance::Model) -> Self {
        Self {
            maintenance_id: entity.maintenance_id,
            complexity_level: entity.complexity_level,
            downtime_duration: entity.downtime_duration,
            maintenance_date: entity.maintenance_date,
            parts: entity.parts,
            coordinate_x: entity.coordinate_x,
            coordinate_y: entity.coordinate_y,
            aircraft_id: entity.aircraft_id,
        }
    }
}

/// Parameters for adding a maintenance record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMaintenanceParams {
    pub maintenance_id: i32,
    pub complexity_level: Option<ComplexityLevel>,
    pub downtime_duration: Option<i32>,
    pub maintenance_date: Option<NaiveDate>,
    pub parts: Option<String>,
    pub coordinate_x: f64,
    pub coordinate_y: f64,
    pub aircraft_id: String,
}

impl TryFrom<AddMaintenanceDto> for CreateMaintenanceParams {
    type Error = AppError;

    fn try_from(dto: AddMaintenanceDto) -> Result<Self, Self::Error> {
        Ok(Self {
            maintenance_id: require(dto.maintenance_id, "maintenanceID")?,
            complexity_level: dto.complexity,
            downtime_duration: dto.downtime,
            maintenance_date: parse_optional_date(dto.maintenance_date, "maintenanceDate")?,
            parts: dto.parts,
            coordinate_x: require(dto.coordinate_x, "coordinateX")?,
            coordinate_y: require(dto.coordinate_y, "coordinateY")?,
            aircraft_id: require_text(dto.aircraft_id, "aircraftID")?,
        })
    }
}

/// Parameters for moving a maintenance record to another aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignMaintenanceParams {
    pub maintenance_id: i32,
    pub aircraft_id: String,
}

impl TryFrom<AssignMaintenanceDto> for AssignMaintenanceParams {
    type Error = AppError;

    fn try_from(dto: AssignMaintenanceDto) -> Result<Self, Self::Error> {
        Ok(Self {
            aircraft_id: require_text(dto.aircraft_id, "aircraftID")?,
            maintenance_id: require(dto.maintenance_id, "maintenanceID")?,
        })
    }
}

/// Outcome of removing a maintenance record.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedMaintenance {
    pub maintenance_id: i32,
    pub aircraft_id: String,
    /// Damage rows deleted for the record's aircraft.
    pub damage_removed: u64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct MaxAvgDowntimeRow {
    pub max_avg_downtime: Option<f64>,
}

impl MaxAvgDowntimeRow {
    pub fn into_dto(self) -> MaxAvgDowntimeDto {
        MaxAvgDowntimeDto([self.max_avg_downtime])
    }
}
