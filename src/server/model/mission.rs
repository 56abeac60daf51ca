//! Mission domain models and parameters.
//!
//! A mission is stored across `mission` and `mission_weather`, joined on
//! `mission_location` + `mission_date`.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::MissionOutcome;
use sea_orm::FromQueryResult;

use crate::{
    model::mission::{AddMissionDto, FlyDto, MissionRowDto},
    server::{
        error::AppError,
        util::parse::{parse_date, require, require_text},
    },
};

/// Logical mission reassembled from its fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub mission_id: i32,
    pub mission_date: NaiveDate,
    pub mission_location: String,
    pub weather: Option<String>,
    pub outcome: Option<MissionOutcome>,
    /// Seconds.
    pub duration: Option<i32>,
}

impl Mission {
    pub fn from_fragments(
        identity: entity::mission::Model,
        weather: entity::mission_weather::Model,
    ) -> Self {
        Self {
            mission_id: identity.mission_id,
            mission_date: identity.mission_date,
            mission_location: identity.mission_location,
            weather: weather.weather,
            outcome: identity.outcome,
            duration: identity.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMissionParams {
    pub mission_id: i32,
    pub mission_date: NaiveDate,
    pub mission_location: String,
    pub weather: Option<String>,
    pub outcome: Option<MissionOutcome>,
    pub duration: Option<i32>,
}

impl TryFrom<AddMissionDto> for CreateMissionParams {
    type Error = AppError;

    fn try_from(dto: AddMissionDto) -> Result<Self, Self::Error> {
        let mission_id = require(dto.mission_id, "missionID")?;
        let mission_date = require_text(dto.mission_date, "missionDate")?;

        Ok(Self {
            mission_id,
            mission_date: parse_date(&mission_date, "missionDate")?,
            mission_location: require_text(dto.mission_location, "missionLocation")?,
            weather: dto.mission_weather,
            outcome: dto.mission_outcome,
            duration: dto.mission_duration,
        })
    }
}

/// Parameters for recording that a crew member flew a mission with a squadron.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyParams {
    pub crew_id: i32,
    pub mission_id: i32,
    pub squadron_id: i32,
}

impl TryFrom<FlyDto> for FlyParams {
    type Error = AppError;

    fn try_from(dto: FlyDto) -> Result<Self, Self::Error> {
        Ok(Self {
            crew_id: require(dto.crew_id, "crewID")?,
            mission_id: require(dto.mission_id, "missionID")?,
            squadron_id: require(dto.squadron_id, "squadronID")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct MissionRow {
    pub mission_id: i32,
    pub mission_date: NaiveDate,
    pub mission_location: String,
    pub weather: Option<String>,
    pub outcome: Option<MissionOutcome>,
    pub duration: Option<i32>,
    pub crew_id: Option<i32>,
    pub squadron_id: Option<i32>,
}

impl MissionRow {
    pub fn into_dto(self) -> MissionRowDto {
        MissionRowDto(
            self.mission_id,
            self.mission_date,
            self.mission_location,
            self.weather,
            self.outcome,
            self.duration,
            self.crew_id,
            self.squadron_id,
        )
    }
}
