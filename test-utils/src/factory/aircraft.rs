//! Aircraft factory.
//!
//! Inserts all three aircraft fragments with matching `year_introduced` + `manufacturer`.
//! The default manufacturer is unique per factory so defaults never collide on the
//! fragment primary keys.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test aircraft with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let aircraft = AircraftFactory::new(&db)
///     .aircraft_id("F-22")
///     .manufacturer("Lockheed")
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    aircraft_id: String,
    year_introduced: i32,
    manufacturer: String,
    model: Option<String>,
    main_weapon: Option<String>,
}

impl<'a> AircraftFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            aircraft_id: format!("AC-{}", id),
            year_introduced: 1990,
            manufacturer: format!("Manufacturer {}", id),
            model: Some(format!("Model {}", id)),
            main_weapon: Some("Cannon".to_string()),
        }
    }

    pub fn aircraft_id(mut self, aircraft_id: impl Into<String>) -> Self {
        self.aircraft_id = aircraft_id.into();
        self
    }

    pub fn year_introduced(mut self, year_introduced: i32) -> Self {
        self.year_introduced = year_introduced;
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn main_weapon(mut self, main_weapon: Option<String>) -> Self {
        self.main_weapon = main_weapon;
        self
    }

    /// Inserts the model, armament and identity fragments.
    ///
    /// # Returns
    /// - `Ok(entity::aircraft::Model)` - The identity fragment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        entity::aircraft_model::ActiveModel {
            year_introduced: ActiveValue::Set(self.year_introduced),
            manufacturer: ActiveValue::Set(self.manufacturer.clone()),
            model: ActiveValue::Set(self.model),
        }
        .insert(self.db)
        .await?;

        entity::aircraft_armament::ActiveModel {
            year_introduced: ActiveValue::Set(self.year_introduced),
            manufacturer: ActiveValue::Set(self.manufacturer.clone()),
            main_weapon: ActiveValue::Set(self.main_weapon),
        }
        .insert(self.db)
        .await?;

        entity::aircraft::ActiveModel {
            aircraft_id: ActiveValue::Set(self.aircraft_id),
            year_introduced: ActiveValue::Set(self.year_introduced),
            manufacturer: ActiveValue::Set(self.manufacturer),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an aircraft with default values.
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).build().await
}
