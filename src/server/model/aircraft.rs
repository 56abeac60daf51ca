//! Aircraft domain models and parameters.
//!
//! An aircraft is stored across three fragments (`aircraft`, `aircraft_model`,
//! `aircraft_armament`) joined on `year_introduced` + `manufacturer`. Inside the server it
//! is always handled as the single [`Aircraft`] type.

use chrono::NaiveDate;
use sea_orm::FromQueryResult;

use crate::{
    model::aircraft::{AddAircraftDto, AddDamageDto, AircraftRowDto, AssignCrewDto},
    server::{
        error::AppError,
        util::parse::{parse_date, require, require_text},
    },
};

/// Logical aircraft reassembled from its fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub aircraft_id: String,
    pub year_introduced: i32,
    pub model: Option<String>,
    pub manufacturer: String,
    pub main_weapon: Option<String>,
}

impl Aircraft {
    /// Converts the three fragment models into the logical aircraft.
    ///
    /// The join attributes are taken from the identity fragment; callers are expected to
    /// pass fragments that agree on them.
    pub fn from_fragments(
        identity: entity::aircraft::Model,
        model: entity::aircraft_model::Model,
        armament: entity::aircraft_armament::Model,
    ) -> Self {
        Self {
            aircraft_id: identity.aircraft_id,
            year_introduced: identity.year_introduced,
            model: model.model,
            manufacturer: identity.manufacturer,
            main_weapon: armament.main_weapon,
        }
    }
}

/// Parameters for adding an aircraft across its three fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAircraftParams {
    pub aircraft_id: String,
    pub year_introduced: i32,
    pub model: Option<String>,
    pub manufacturer: String,
    pub main_weapon: Option<String>,
}

impl TryFrom<AddAircraftDto> for CreateAircraftParams {
    type Error = AppError;

    fn try_from(dto: AddAircraftDto) -> Result<Self, Self::Error> {
        Ok(Self {
            aircraft_id: require_text(dto.aircraft_id, "aircraftID")?,
            year_introduced: require(dto.year_introduced, "yearIntroduced")?,
            model: dto.model,
            manufacturer: require_text(dto.manufacturer, "manufacturer")?,
            main_weapon: dto.main_weapon,
        })
    }
}

/// Parameters for recording damage against an aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDamageParams {
    pub aircraft_id: String,
    pub damage_part: String,
    pub damage_date: NaiveDate,
}

impl TryFrom<AddDamageDto> for CreateDamageParams {
    type Error = AppError;

    fn try_from(dto: AddDamageDto) -> Result<Self, Self::Error> {
        let aircraft_id = require_text(dto.aircraft_id, "aircraftID")?;
        let damage_part = require_text(dto.damage_part, "damagePart")?;
        let damage_date = require_text(dto.damage_date, "damageDate")?;

        Ok(Self {
            aircraft_id,
            damage_part,
            damage_date: parse_date(&damage_date, "damageDate")?,
        })
    }
}

/// Parameters for assigning a crew member to an aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignCrewParams {
    pub aircraft_id: String,
    pub crew_id: i32,
}

impl TryFrom<AssignCrewDto> for AssignCrewParams {
    type Error = AppError;

    fn try_from(dto: AssignCrewDto) -> Result<Self, Self::Error> {
        Ok(Self {
            aircraft_id: require_text(dto.aircraft_id, "aircraftID")?,
            crew_id: require(dto.crew_id, "crewID")?,
        })
    }
}

/// One flattened row of the aircraft join.
///
/// An aircraft with N crew assignments and M damage records yields up to N×M rows.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct AircraftRow {
    pub aircraft_id: String,
    pub year_introduced: i32,
    pub model: Option<String>,
    pub manufacturer: String,
    pub main_weapon: Option<String>,
    pub crew_id: Option<i32>,
    pub maintenance_id: Option<i32>,
    pub damage_part: Option<String>,
    pub damage_date: Option<NaiveDate>,
}

impl AircraftRow {
    pub fn into_dto(self) -> AircraftRowDto {
        AircraftRowDto(
            self.aircraft_id,
            self.year_introduced,
            self.model,
            self.manufacturer,
            self.main_weapon,
            self.crew_id,
            self.maintenance_id,
            self.damage_part,
            self.damage_date,
        )
    }
}
