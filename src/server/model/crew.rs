use sea_orm::FromQueryResult;

use crate::{
    model::crew::{AddCrewDto, CrewRowDto, RoleCountDto, UpdateRankDto, VeteranDto},
    server::{
        error::AppError,
        util::parse::{require, require_text},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Crew {
    pub crew_id: i32,
    pub name: Option<String>,
    pub role: Option<String>,
    pub rank: Option<String>,
}

impl Crew {
    pub fn from_entity(entity: entity::crew::Model) -> Self {
        Self {
            crew_id: entity.crew_id,
            name: entity.name,
            role: entity.role,
            rank: entity.rank,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCrewParams {
    pub crew_id: i32,
    pub name: Option<String>,
    pub role: Option<String>,
    pub rank: Option<String>,
}

impl TryFrom<AddCrewDto> for CreateCrewParams {
    type Error = AppError;

    fn try_from(dto: AddCrewDto) -> Result<Self, Self::Error> {
        Ok(Self {
            crew_id: require(dto.crew_id, "crewID")?,
            name: dto.crew_name,
            role: dto.crew_role,
            rank: dto.crew_rank,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRankParams {
    pub crew_id: i32,
    pub rank: String,
}

impl TryFrom<UpdateRankDto> for UpdateRankParams {
    type Error = AppError;

    fn try_from(dto: UpdateRankDto) -> Result<Self, Self::Error> {
        Ok(Self {
            crew_id: require(dto.crew_id, "crewID")?,
            rank: require_text(dto.new_rank, "newRank")?,
        })
    }
}

/// One flattened row of the crew join: the crew member, one of their flights and one of
/// their aircraft assignments.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CrewRow {
    pub crew_id: i32,
    pub name: Option<String>,
    pub role: Option<String>,
    pub rank: Option<String>,
    pub squadron_id: Option<i32>,
    pub mission_id: Option<i32>,
    pub aircraft_id: Option<String>,
}

impl CrewRow {
    pub fn into_dto(self) -> CrewRowDto {
        CrewRowDto(
            self.crew_id,
            self.name,
            self.role,
            self.rank,
            self.squadron_id,
            self.mission_id,
            self.aircraft_id,
        )
    }
}

/// Crew member who has flown every recorded mission.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct VeteranRow {
    pub crew_id: i32,
    pub name: Option<String>,
    pub role: Option<String>,
    pub rank: Option<String>,
}

impl VeteranRow {
    pub fn into_dto(self) -> VeteranDto {
        VeteranDto(self.crew_id, self.name, self.role, self.rank)
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct RoleCountRow {
    pub role: Option<String>,
    pub crew_count: i64,
}

impl RoleCountRow {
    pub fn into_dto(self) -> RoleCountDto {
        RoleCountDto(self.role, self.crew_count)
    }
}
