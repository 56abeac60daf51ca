use sea_orm::entity::prelude::*;

/// Identity fragment of an aircraft. `year_introduced` + `manufacturer` join it to
/// `aircraft_model` and `aircraft_armament`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub aircraft_id: String,
    pub year_introduced: i32,
    pub manufacturer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aircraft_damage::Entity")]
    AircraftDamage,
    #[sea_orm(has_many = "super::maintenance::Entity")]
    Maintenance,
    #[sea_orm(has_many = "super::operate::Entity")]
    Operate,
}

impl Related<super::aircraft_damage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftDamage.def()
    }
}

impl Related<super::maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maintenance.def()
    }
}

impl Related<super::operate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
