use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "crew")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub crew_id: i32,
    pub name: Option<String>,
    pub role: Option<String>,
    pub rank: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fly::Entity")]
    Fly,
    #[sea_orm(has_many = "super::operate::Entity")]
    Operate,
}

impl Related<super::fly::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fly.def()
    }
}

impl Related<super::operate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
