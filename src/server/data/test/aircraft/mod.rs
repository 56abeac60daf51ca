use crate::server::{
    data::{aircraft::AircraftRepository, damage::DamageRepository},
    model::aircraft::{AssignCrewParams, CreateAircraftParams, CreateDamageParams},
};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    SqlErr,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn params(aircraft_id: &str, year_introduced: i32, manufacturer: &str) -> CreateAircraftParams {
    CreateAircraftParams {
        aircraft_id: aircraft_id.to_string(),
        year_introduced,
        model: Some("Raptor".to_string()),
        manufacturer: manufacturer.to_string(),
        main_weapon: Some("M61 Vulcan".to_string()),
    }
}
