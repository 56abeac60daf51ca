use crate::server::{
    data::crew::CrewRepository,
    model::crew::{CreateCrewParams, UpdateRankParams},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_excess_roles;
mod get_rows;
mod get_veterans;
mod update_rank;
