use entity::sea_orm_active_enums::AvailabilityStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMechanicDto {
    #[serde(rename = "mechanicID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub mechanic_id: Option<i32>,
    pub mechanic_name: Option<String>,
    pub mechanic_contact: Option<String>,
    /// `O` or `F`
    #[schema(value_type = Option<String>)]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_code")]
    pub availability_status: Option<AvailabilityStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct AssignTaskDto {
    #[serde(rename = "mechanicID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub mechanic_id: Option<i32>,
    #[serde(rename = "maintenanceID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub maintenance_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub hours: Option<i32>,
}

/// `[mechanicID, name, contact, availabilityStatus, maintenanceID]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MechanicRowDto(
    pub i32,
    pub Option<String>,
    pub String,
    pub Option<AvailabilityStatus>,
    pub Option<i32>,
);

/// `[name, totalHours]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkingHoursDto(pub Option<String>, pub Option<i64>);

/// `[availabilityStatus, mechanicCount]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusCountDto(pub Option<AvailabilityStatus>, pub i64);
