use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mechanic availability, stored as a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum AvailabilityStatus {
    #[sea_orm(string_value = "O")]
    #[serde(rename = "O")]
    Occupied,
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    Free,
}

/// Maintenance complexity, stored as a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum ComplexityLevel {
    #[sea_orm(string_value = "L")]
    #[serde(rename = "L")]
    Low,
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Medium,
    #[sea_orm(string_value = "H")]
    #[serde(rename = "H")]
    High,
}

/// Mission outcome, stored as a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum MissionOutcome {
    #[sea_orm(string_value = "S")]
    #[serde(rename = "S")]
    Success,
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    Failure,
}
