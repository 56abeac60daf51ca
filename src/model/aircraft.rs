use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddAircraftDto {
    #[serde(rename = "aircraftID")]
    pub aircraft_id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub year_introduced: Option<i32>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub main_weapon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDamageDto {
    #[serde(rename = "aircraftID")]
    pub aircraft_id: Option<String>,
    pub damage_part: Option<String>,
    /// `YYYY-MM-DD` or `DD/MM/YYYY`
    pub damage_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct AssignCrewDto {
    #[serde(rename = "aircraftID")]
    pub aircraft_id: Option<String>,
    #[serde(rename = "crewID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub crew_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct RemoveAircraftDto {
    #[serde(rename = "aircraftID")]
    pub aircraft_id: Option<String>,
}

/// `[aircraftID, yearIntroduced, model, manufacturer, mainWeapon, crewID, maintenanceID,
/// damagePart, damageDate]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AircraftRowDto(
    pub String,
    pub i32,
    pub Option<String>,
    pub String,
    pub Option<String>,
    pub Option<i32>,
    pub Option<i32>,
    pub Option<String>,
    pub Option<NaiveDate>,
);
