use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::aircraft::CreateDamageParams;

pub struct DamageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DamageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records damage against an aircraft. Fails on the foreign key if the aircraft does
    /// not exist.
    pub async fn create(
        &self,
        params: CreateDamageParams,
    ) -> Result<entity::aircraft_damage::Model, DbErr> {
        entity::aircraft_damage::ActiveModel {
            aircraft_id: ActiveValue::Set(params.aircraft_id),
            damage_part: ActiveValue::Set(params.damage_part),
            damage_date: ActiveValue::Set(params.damage_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
