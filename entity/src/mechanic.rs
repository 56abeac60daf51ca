use sea_orm::entity::prelude::*;

/// Identity fragment of a mechanic. `contact` joins it to `mechanic_name` and
/// `mechanic_availability`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mechanic")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mechanic_id: i32,
    pub contact: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::performed::Entity")]
    Performed,
}

impl Related<super::performed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performed.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
