//! Shared helper utilities for factory methods.
//!
//! ID generation plus one-call inserts for damage rows and the association tables.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Next unique value narrowed to the width of the integer key columns.
pub fn next_key() -> i32 {
    (next_id() % i32::MAX as u64) as i32
}

/// Records damage against an aircraft, dated 2024-01-15.
pub async fn create_damage(
    db: &DatabaseConnection,
    aircraft_id: &str,
    damage_part: &str,
) -> Result<entity::aircraft_damage::Model, DbErr> {
    entity::aircraft_damage::ActiveModel {
        aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
        damage_part: ActiveValue::Set(damage_part.to_string()),
        damage_date: ActiveValue::Set(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        ),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Assigns a crew member to an aircraft.
pub async fn create_operate(
    db: &DatabaseConnection,
    aircraft_id: &str,
    crew_id: i32,
) -> Result<entity::operate::Model, DbErr> {
    entity::operate::ActiveModel {
        aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
        crew_id: ActiveValue::Set(crew_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Records that a crew member flew a mission.
pub async fn create_fly(
    db: &DatabaseConnection,
    crew_id: i32,
    mission_id: i32,
    squadron_id: i32,
) -> Result<entity::fly::Model, DbErr> {
    entity::fly::ActiveModel {
        crew_id: ActiveValue::Set(crew_id),
        mission_id: ActiveValue::Set(mission_id),
        squadron_id: ActiveValue::Set(squadron_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Logs a mechanic's hours against a maintenance record.
pub async fn create_performed(
    db: &DatabaseConnection,
    mechanic_id: i32,
    maintenance_id: i32,
    working_hours: Option<i32>,
) -> Result<entity::performed::Model, DbErr> {
    entity::performed::ActiveModel {
        mechanic_id: ActiveValue::Set(mechanic_id),
        maintenance_id: ActiveValue::Set(maintenance_id),
        working_hours: ActiveValue::Set(working_hours),
        ..Default::default()
    }
    .insert(db)
    .await
}
