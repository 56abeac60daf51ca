use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft_model")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub year_introduced: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub manufacturer: String,
    pub model: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
