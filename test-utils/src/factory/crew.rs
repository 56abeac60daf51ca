use crate::factory::helpers::next_key;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test crew members.
pub struct CrewFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::crew::Model,
}

impl<'a> CrewFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_key();

        Self {
            db,
            entity: entity::crew::Model {
                crew_id: id,
                name: Some(format!("Crew {}", id)),
                role: Some("Pilot".to_string()),
                rank: Some("Lieutenant".to_string()),
            },
        }
    }

    pub fn crew_id(mut self, crew_id: i32) -> Self {
        self.entity.crew_id = crew_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = Some(name.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = Some(role.into());
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.entity.rank = Some(rank.into());
        self
    }

    pub async fn build(self) -> Result<entity::crew::Model, DbErr> {
        entity::crew::ActiveModel {
            crew_id: ActiveValue::Set(self.entity.crew_id),
            name: ActiveValue::Set(self.entity.name),
            role: ActiveValue::Set(self.entity.role),
            rank: ActiveValue::Set(self.entity.rank),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a crew member with default values.
pub async fn create_crew(db: &DatabaseConnection) -> Result<entity::crew::Model, DbErr> {
    CrewFactory::new(db).build().await
}
