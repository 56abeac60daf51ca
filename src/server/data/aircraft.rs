use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, Statement, TransactionTrait,
};

use crate::server::{
    data::commit_or_rollback,
    model::aircraft::{Aircraft, AircraftRow, AssignCrewParams, CreateAircraftParams},
};

/// Aircraft join. Fragments are matched on both join attributes; crew, damage and
/// maintenance are outer-joined, so one aircraft can span many rows.
const AIRCRAFT_ROWS_SQL: &str = r#"
SELECT a.aircraft_id, a.year_introduced, am.model, a.manufacturer, aa.main_weapon,
       o.crew_id, m.maintenance_id, d.damage_part, d.damage_date
FROM aircraft a
LEFT JOIN aircraft_model am
       ON am.year_introduced = a.year_introduced AND am.manufacturer = a.manufacturer
LEFT JOIN aircraft_armament aa
       ON aa.year_introduced = a.year_introduced AND aa.manufacturer = a.manufacturer
LEFT JOIN operate o ON o.aircraft_id = a.aircraft_id
LEFT JOIN aircraft_damage d ON d.aircraft_id = a.aircraft_id
LEFT JOIN maintenance m ON m.aircraft_id = a.aircraft_id
ORDER BY a.aircraft_id, o.crew_id, m.maintenance_id, d.id
"#;

pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the model, armament and identity fragments in one transaction.
    ///
    /// Either all three rows are persisted or none are. A second aircraft sharing the
    /// same `year_introduced` + `manufacturer` fails on the fragment primary key.
    pub async fn create(&self, params: CreateAircraftParams) -> Result<Aircraft, DbErr> {
        let txn = self.db.begin().await?;

        let result = async {
            let model = entity::aircraft_model::ActiveModel {
                year_introduced: ActiveValue::Set(params.year_introduced),
                manufacturer: ActiveValue::Set(params.manufacturer.clone()),
                model: ActiveValue::Set(params.model),
            }
            .insert(&txn)
            .await?;

            let armament = entity::aircraft_armament::ActiveModel {
                year_introduced: ActiveValue::Set(params.year_introduced),
                manufacturer: ActiveValue::Set(params.manufacturer.clone()),
                main_weapon: ActiveValue::Set(params.main_weapon),
            }
            .insert(&txn)
            .await?;

            let identity = entity::aircraft::ActiveModel {
                aircraft_id: ActiveValue::Set(params.aircraft_id),
                year_introduced: ActiveValue::Set(params.year_introduced),
                manufacturer: ActiveValue::Set(params.manufacturer),
            }
            .insert(&txn)
            .await?;

            Ok::<_, DbErr>(Aircraft::from_fragments(identity, model, armament))
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    /// Gets every aircraft as flattened join rows.
    pub async fn get_rows(&self) -> Result<Vec<AircraftRow>, DbErr> {
        let backend = self.db.get_database_backend();

        AircraftRow::find_by_statement(Statement::from_string(backend, AIRCRAFT_ROWS_SQL))
            .all(self.db)
            .await
    }

    /// Deletes an aircraft together with the fragments only it joins to.
    ///
    /// Crew assignments, damage and maintenance records go with the identity row through
    /// the foreign key cascade. The model and armament fragments are removed in the same
    /// transaction once no remaining aircraft shares their `year_introduced` +
    /// `manufacturer`, so the same aircraft can be added again afterwards.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of aircraft rows deleted, 0 when the ID does not exist
    pub async fn delete(&self, aircraft_id: &str) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let result = async {
            let Some(aircraft) = entity::prelude::Aircraft::find_by_id(aircraft_id.to_string())
                .one(&txn)
                .await?
            else {
                return Ok::<_, DbErr>(0);
            };

            let deleted = entity::prelude::Aircraft::delete_by_id(aircraft.aircraft_id.clone())
                .exec(&txn)
                .await?;

            let sharing = entity::prelude::Aircraft::find()
                .filter(entity::aircraft::Column::YearIntroduced.eq(aircraft.year_introduced))
                .filter(entity::aircraft::Column::Manufacturer.eq(aircraft.manufacturer.as_str()))
                .count(&txn)
                .await?;

            if sharing == 0 {
                let key = (aircraft.year_introduced, aircraft.manufacturer);

                entity::prelude::AircraftModel::delete_by_id(key.clone())
                    .exec(&txn)
                    .await?;
                entity::prelude::AircraftArmament::delete_by_id(key)
                    .exec(&txn)
                    .await?;
            }

            Ok(deleted.rows_affected)
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    /// Inserts an `operate` row. Duplicate assignments are kept as separate rows.
    pub async fn assign_crew(
        &self,
        params: AssignCrewParams,
    ) -> Result<entity::operate::Model, DbErr> {
        entity::operate::ActiveModel {
            aircraft_id: ActiveValue::Set(params.aircraft_id),
            crew_id: ActiveValue::Set(params.crew_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
