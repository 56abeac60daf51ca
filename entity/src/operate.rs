use sea_orm::entity::prelude::*;

/// Crew member operating an aircraft. No uniqueness on the pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "operate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_id: String,
    pub crew_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::AircraftId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Aircraft,
    #[sea_orm(
        belongs_to = "super::crew::Entity",
        from = "Column::CrewId",
        to = "super::crew::Column::CrewId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Crew,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
