use chrono::NaiveDate;
use entity::sea_orm_active_enums::MissionOutcome;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMissionDto {
    #[serde(rename = "missionID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub mission_id: Option<i32>,
    /// `YYYY-MM-DD` or `DD/MM/YYYY`
    pub mission_date: Option<String>,
    pub mission_location: Option<String>,
    pub mission_weather: Option<String>,
    /// `S` or `F`
    #[schema(value_type = Option<String>)]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_code")]
    pub mission_outcome: Option<MissionOutcome>,
    /// Seconds
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub mission_duration: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct FlyDto {
    #[serde(rename = "crewID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub crew_id: Option<i32>,
    #[serde(rename = "missionID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub mission_id: Option<i32>,
    #[serde(rename = "squadronID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub squadron_id: Option<i32>,
}

/// `[missionID, missionDate, missionLocation, weather, outcome, duration, crewID, squadronID]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MissionRowDto(
    pub i32,
    pub NaiveDate,
    pub String,
    pub Option<String>,
    pub Option<MissionOutcome>,
    pub Option<i32>,
    pub Option<i32>,
    pub Option<i32>,
);
