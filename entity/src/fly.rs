use sea_orm::entity::prelude::*;

/// Crew member flying a mission under a squadron. No uniqueness on the tuple.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fly")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crew_id: i32,
    pub mission_id: i32,
    pub squadron_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::crew::Entity",
        from = "Column::CrewId",
        to = "super::crew::Column::CrewId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Crew,
    #[sea_orm(
        belongs_to = "super::mission::Entity",
        from = "Column::MissionId",
        to = "super::mission::Column::MissionId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mission,
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
