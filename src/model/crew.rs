use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCrewDto {
    #[serde(rename = "crewID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub crew_id: Option<i32>,
    pub crew_name: Option<String>,
    pub crew_role: Option<String>,
    pub crew_rank: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRankDto {
    #[serde(rename = "crewID")]
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub crew_id: Option<i32>,
    pub new_rank: Option<String>,
}

/// `[crewID, name, role, rank, squadronID, missionID, aircraftID]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrewRowDto(
    pub i32,
    pub Option<String>,
    pub Option<String>,
    pub Option<String>,
    pub Option<i32>,
    pub Option<i32>,
    pub Option<String>,
);

/// `[crewID, name, role, rank]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VeteranDto(
    pub i32,
    pub Option<String>,
    pub Option<String>,
    pub Option<String>,
);

/// `[role, crewCount]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleCountDto(pub Option<String>, pub i64);
