use sea_orm::entity::prelude::*;

/// Damage reported against an aircraft. The surrogate `id` is never exposed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft_damage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_id: String,
    pub damage_part: String,
    pub damage_date: Date,
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
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
