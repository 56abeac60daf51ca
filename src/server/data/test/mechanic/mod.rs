use crate::server::{
    data::mechanic::MechanicRepository,
    model::mechanic::{AssignTaskParams, CreateMechanicParams},
};
use entity::sea_orm_active_enums::AvailabilityStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    SqlErr,
};
use test_utils::{builder::TestBuilder, factory};

mod assign_task;
mod count_by_status;
mod get_max_working_hours;
mod get_rows;
