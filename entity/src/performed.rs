use sea_orm::entity::prelude::*;

/// Hours a mechanic logged against a maintenance task. No uniqueness on the pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "performed")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mechanic_id: i32,
    pub maintenance_id: i32,
    pub working_hours: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maintenance::Entity",
        from = "Column::MaintenanceId",
        to = "super::maintenance::Column::MaintenanceId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Maintenance,
    #[sea_orm(
        belongs_to = "super::mechanic::Entity",
        from = "Column::MechanicId",
        to = "super::mechanic::Column::MechanicId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mechanic,
}

impl Related<super::maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maintenance.def()
    }
}

impl Related<super::mechanic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mechanic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
