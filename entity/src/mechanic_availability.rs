use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AvailabilityStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mechanic_availability")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contact: String,
    pub availability_status: Option<AvailabilityStatus>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
