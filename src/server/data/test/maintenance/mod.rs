use crate::server::{
    data::maintenance::MaintenanceRepository,
    model::maintenance::{AssignMaintenanceParams, CreateMaintenanceParams},
};
use entity::sea_orm_active_enums::ComplexityLevel;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod assign_aircraft;
mod create;
mod delete_with_damage;
