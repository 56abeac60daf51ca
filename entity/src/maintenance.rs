use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ComplexityLevel;

/// Maintenance task, the aircraft it is assigned to and the repair base it is stationed at.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub maintenance_id: i32,
    pub complexity_level: Option<ComplexityLevel>,
    pub downtime_duration: Option<i32>,
    pub maintenance_date: Option<Date>,
    pub parts: Option<String>,
    pub coordinate_x: f64,
    pub coordinate_y: f64,
    pub aircraft_id: String,
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
    #[sea_orm(has_many = "super::performed::Entity")]
    Performed,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl Related<super::performed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performed.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
