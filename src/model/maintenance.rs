use entity::sea_orm_active_enums::ComplexityLevel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMaintenanceDto {
    #[serde(rename = "maintenanceID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub maintenance_id: Option<i32>,
    /// `L`, `M` or `H`
    #[schema(value_type = Option<String>)]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_code")]
    pub complexity: Option<ComplexityLevel>,
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub downtime: Option<i32>,
    /// `YYYY-MM-DD` or `DD/MM/YYYY`
    pub maintenance_date: Option<String>,
    pub parts: Option<String>,
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub coordinate_x: Option<f64>,
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub coordinate_y: Option<f64>,
    #[serde(rename = "aircraftID")]
    pub aircraft_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct AssignMaintenanceDto {
    #[serde(rename = "aircraftID")]
    pub aircraft_id: Option<String>,
    #[serde(rename = "maintenanceID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub maintenance_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct RemoveMaintenanceDto {
    #[serde(rename = "maintenanceID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub maintenance_id: Option<i32>,
}

/// `[maxAvgDowntime]`, null when no maintenance has been recorded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MaxAvgDowntimeDto(pub [Option<f64>; 1]);
