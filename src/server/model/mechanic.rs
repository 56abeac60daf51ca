//! Mechanic domain models and parameters.
//!
//! A mechanic is stored across `mechanic`, `mechanic_name` and `mechanic_availability`,
//! joined on `contact`.

use entity::sea_orm_active_enums::AvailabilityStatus;
use sea_orm::FromQueryResult;

use crate::{
    model::mechanic::{
        AddMechanicDto, AssignTaskDto, MechanicRowDto, StatusCountDto, WorkingHoursDto,
    },
    server::{
        error::AppError,
        util::parse::{require, require_text},
    },
};

/// Logical mechanic reassembled from its fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Mechanic {
    pub mechanic_id: i32,
    pub name: Option<String>,
    pub contact: String,
    pub availability_status: Option<AvailabilityStatus>,
}

impl Mechanic {
    pub fn from_fragments(
        identity: entity::mechanic::Model,
        name: entity::mechanic_name::Model,
        availability: entity::mechanic_availability::Model,
    ) -> Self {
        Self {
            mechanic_id: identity.mechanic_id,
            name: name.name,
            contact: identity.contact,
            availability_status: availability.availability_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMechanicParams {
    pub mechanic_id: i32,
    pub name: Option<String>,
    pub contact: String,
    pub availability_status: Option<AvailabilityStatus>,
}

impl TryFrom<AddMechanicDto> for CreateMechanicParams {
    type Error = AppError;

    fn try_from(dto: AddMechanicDto) -> Result<Self, Self::Error> {
        Ok(Self {
            mechanic_id: require(dto.mechanic_id, "mechanicID")?,
            name: dto.mechanic_name,
            contact: require_text(dto.mechanic_contact, "mechanicContact")?,
            availability_status: dto.availability_status,
        })
    }
}

/// Parameters for logging a mechanic's hours against a maintenance record.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignTaskParams {
    pub mechanic_id: i32,
    pub maintenance_id: i32,
    pub working_hours: Option<i32>,
}

impl TryFrom<AssignTaskDto> for AssignTaskParams {
    type Error = AppError;

    fn try_from(dto: AssignTaskDto) -> Result<Self, Self::Error> {
        Ok(Self {
            mechanic_id: require(dto.mechanic_id, "mechanicID")?,
            maintenance_id: require(dto.maintenance_id, "maintenanceID")?,
            working_hours: dto.hours,
        })
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct MechanicRow {
    pub mechanic_id: i32,
    pub name: Option<String>,
    pub contact: String,
    pub availability_status: Option<AvailabilityStatus>,
    pub maintenance_id: Option<i32>,
}

impl MechanicRow {
    pub fn into_dto(self) -> MechanicRowDto {
        MechanicRowDto(
            self.mechanic_id,
            self.name,
            self.contact,
            self.availability_status,
            self.maintenance_id,
        )
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct WorkingHoursRow {
    pub name: Option<String>,
    pub total_hours: Option<i64>,
}

impl WorkingHoursRow {
    pub fn into_dto(self) -> WorkingHoursDto {
        WorkingHoursDto(self.name, self.total_hours)
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct StatusCountRow {
    pub availability_status: Option<AvailabilityStatus>,
    pub mechanic_count: i64,
}

impl StatusCountRow {
    pub fn into_dto(self) -> StatusCountDto {
        StatusCountDto(self.availability_status, self.mechanic_count)
    }
}
