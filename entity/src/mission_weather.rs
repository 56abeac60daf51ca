use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mission_weather")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mission_location: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub mission_date: Date,
    pub weather: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
