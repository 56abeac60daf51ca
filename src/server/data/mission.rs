use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, FromQueryResult, Statement,
    TransactionTrait,
};

use crate::server::{
    data::commit_or_rollback,
    model::mission::{CreateMissionParams, FlyParams, Mission, MissionRow},
};

/// Missions joined with their weather fragment on location + date, then outer-joined
/// with every flight. Missions whose weather fragment does not match are not returned.
const MISSION_ROWS_SQL: &str = r#"
SELECT m.mission_id, m.mission_date, m.mission_location, mw.weather, m.outcome, m.duration,
       f.crew_id, f.squadron_id
FROM mission m
JOIN mission_weather mw
  ON mw.mission_location = m.mission_location AND mw.mission_date = m.mission_date
LEFT JOIN fly f ON f.mission_id = m.mission_id
ORDER BY m.mission_id, f.id
"#;

pub struct MissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the weather and identity fragments in one transaction.
    pub async fn create(&self, params: CreateMissionParams) -> Result<Mission, DbErr> {
        let txn = self.db.begin().await?;

        let result = async {
            let weather = entity::mission_weather::ActiveModel {
                mission_location: ActiveValue::Set(params.mission_location.clone()),
                mission_date: ActiveValue::Set(params.mission_date),
                weather: ActiveValue::Set(params.weather),
            }
            .insert(&txn)
            .await?;

            let identity = entity::mission::ActiveModel {
                mission_id: ActiveValue::Set(params.mission_id),
                mission_date: ActiveValue::Set(params.mission_date),
                mission_location: ActiveValue::Set(params.mission_location),
                outcome: ActiveValue::Set(params.outcome),
                duration: ActiveValue::Set(params.duration),
            }
            .insert(&txn)
            .await?;

            Ok::<_, DbErr>(Mission::from_fragments(identity, weather))
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    pub async fn get_rows(&self) -> Result<Vec<MissionRow>, DbErr> {
        let backend = self.db.get_database_backend();

        MissionRow::find_by_statement(Statement::from_string(backend, MISSION_ROWS_SQL))
            .all(self.db)
            .await
    }

    /// Records a flight. Fails on the foreign key if the crew member or mission is unknown.
    pub async fn add_fly(&self, params: FlyParams) -> Result<entity::fly::Model, DbErr> {
        entity::fly::ActiveModel {
            crew_id: ActiveValue::Set(params.crew_id),
            mission_id: ActiveValue::Set(params.mission_id),
            squadron_id: ActiveValue::Set(params.squadron_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
