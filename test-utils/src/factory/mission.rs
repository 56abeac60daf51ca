//! Mission factory.
//!
//! Inserts the weather and identity fragments with matching location + date.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::MissionOutcome;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_key;

pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    mission_id: i32,
    mission_date: NaiveDate,
    mission_location: String,
    weather: Option<String>,
    outcome: Option<MissionOutcome>,
    duration: Option<i32>,
}

impl<'a> MissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_key();

        Self {
            db,
            mission_id: id,
            mission_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default(),
            mission_location: format!("Location {}", id),
            weather: Some("Clear".to_string()),
            outcome: Some(MissionOutcome::Success),
            duration: Some(3600),
        }
    }

    pub fn mission_id(mut self, mission_id: i32) -> Self {
        self.mission_id = mission_id;
        self
    }

    pub fn mission_date(mut self, mission_date: NaiveDate) -> Self {
        self.mission_date = mission_date;
        self
    }

    pub fn mission_location(mut self, mission_location: impl Into<String>) -> Self {
        self.mission_location = mission_location.into();
        self
    }

    pub fn weather(mut self, weather: Option<String>) -> Self {
        self.weather = weather;
        self
    }

    pub fn outcome(mut self, outcome: Option<MissionOutcome>) -> Self {
        self.outcome = outcome;
        self
    }

    /// Inserts the weather and identity fragments.
    ///
    /// # Returns
    /// - `Ok(entity::mission::Model)` - The identity fragment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission_weather::ActiveModel {
            mission_location: ActiveValue::Set(self.mission_location.clone()),
            mission_date: ActiveValue::Set(self.mission_date),
            weather: ActiveValue::Set(self.weather),
        }
        .insert(self.db)
        .await?;

        entity::mission::ActiveModel {
            mission_id: ActiveValue::Set(self.mission_id),
            mission_date: ActiveValue::Set(self.mission_date),
            mission_location: ActiveValue::Set(self.mission_location),
            outcome: ActiveValue::Set(self.outcome),
            duration: ActiveValue::Set(self.duration),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission with default values.
pub async fn create_mission(db: &DatabaseConnection) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db).build().await
}
