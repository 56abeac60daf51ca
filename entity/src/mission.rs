use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MissionOutcome;

/// Identity fragment of a mission. `mission_location` + `mission_date` join it to
/// `mission_weather`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mission_id: i32,
    pub mission_date: Date,
    pub mission_location: String,
    pub outcome: Option<MissionOutcome>,
    /// Duration in seconds.
    pub duration: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fly::Entity")]
    Fly,
}

impl Related<super::fly::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fly.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
