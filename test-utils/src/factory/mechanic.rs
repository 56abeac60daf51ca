//! Mechanic factory.
//!
//! Inserts the availability, name and identity fragments sharing one `contact`.

use entity::sea_orm_active_enums::AvailabilityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_key;

pub struct MechanicFactory<'a> {
    db: &'a DatabaseConnection,
    mechanic_id: i32,
    name: Option<String>,
    contact: String,
    availability_status: Option<AvailabilityStatus>,
}

impl<'a> MechanicFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_key();

        Self {
            db,
            mechanic_id: id,
            name: Some(format!("Mechanic {}", id)),
            contact: format!("mechanic{}@fleet.test", id),
            availability_status: Some(AvailabilityStatus::Free),
        }
    }

    pub fn mechanic_id(mut self, mechanic_id: i32) -> Self {
        self.mechanic_id = mechanic_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn availability_status(mut self, status: Option<AvailabilityStatus>) -> Self {
        self.availability_status = status;
        self
    }

    /// Inserts the availability, name and identity fragments.
    ///
    /// # Returns
    /// - `Ok(entity::mechanic::Model)` - The identity fragment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mechanic::Model, DbErr> {
        entity::mechanic_availability::ActiveModel {
            contact: ActiveValue::Set(self.contact.clone()),
            availability_status: ActiveValue::Set(self.availability_status),
        }
        .insert(self.db)
        .await?;

        entity::mechanic_name::ActiveModel {
            contact: ActiveValue::Set(self.contact.clone()),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await?;

        entity::mechanic::ActiveModel {
            mechanic_id: ActiveValue::Set(self.mechanic_id),
            contact: ActiveValue::Set(self.contact),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mechanic with default values.
pub async fn create_mechanic(db: &DatabaseConnection) -> Result<entity::mechanic::Model, DbErr> {
    MechanicFactory::new(db).build().await
}
