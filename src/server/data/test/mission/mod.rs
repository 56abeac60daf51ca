use crate::server::{
    data::mission::MissionRepository,
    model::mission::{CreateMissionParams, FlyParams},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::MissionOutcome;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    SqlErr,
};
use test_utils::{builder::TestBuilder, factory};

mod add_fly;
mod create;

fn params(mission_id: i32, mission_location: &str) -> CreateMissionParams {
    CreateMissionParams {
        mission_id,
        mission_date: NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
        mission_location: mission_location.to_string(),
        weather: Some("Overcast".to_string()),
        outcome: Some(MissionOutcome::Failure),
        duration: Some(5400),
    }
}
