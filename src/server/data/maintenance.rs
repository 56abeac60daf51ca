use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, Statement, TransactionTrait,
};

use crate::server::{
    data::commit_or_rollback,
    model::maintenance::{
        AssignMaintenanceParams, CreateMaintenanceParams, Maintenance, MaxAvgDowntimeRow,
        RemovedMaintenance,
    },
};

/// Largest per-aircraft average downtime. Yields a single row, NULL when there is no
/// maintenance at all.
const MAX_AVG_DOWNTIME_SQL: &str = r#"
SELECT MAX(average_downtime) AS max_avg_downtime
FROM (
    SELECT m.aircraft_id, AVG(m.downtime_duration) AS average_downtime
    FROM maintenance m
    GROUP BY m.aircraft_id
) aircraft_downtime
"#;

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMaintenanceParams) -> Result<Maintenance, DbErr> {
        let maintenance = entity::maintenance::ActiveModel {
            maintenance_id: ActiveValue::Set(params.maintenance_id),
            complexity_level: ActiveValue::Set(params.complexity_level),
            downtime_duration: ActiveValue::Set(params.downtime_duration),
            maintenance_date: ActiveValue::Set(params.maintenance_date),
            parts: ActiveValue::Set(params.parts),
            coordinate_x: ActiveValue::Set(params.coordinate_x),
            coordinate_y: ActiveValue::Set(params.coordinate_y),
            aircraft_id: ActiveValue::Set(params.aircraft_id),
        }
        .insert(self.db)
        .await?;

        Ok(Maintenance::from_entity(maintenance))
    }

    pub async fn get_by_id(&self, maintenance_id: i32) -> Result<Option<Maintenance>, DbErr> {
        let maintenance = entity::prelude::Maintenance::find_by_id(maintenance_id)
            .one(self.db)
            .await?;

        Ok(maintenance.map(Maintenance::from_entity))
    }

    /// Points a maintenance record at another aircraft, replacing the previous assignment.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated, 0 when the maintenance record does not exist
    pub async fn assign_aircraft(&self, params: AssignMaintenanceParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Maintenance::update_many()
            .col_expr(
                entity::maintenance::Column::AircraftId,
                Expr::value(params.aircraft_id),
            )
            .filter(entity::maintenance::Column::MaintenanceId.eq(params.maintenance_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a maintenance record along with every damage row of its aircraft.
    ///
    /// The damage deletion is scoped to the aircraft, not to the maintenance record: damage
    /// logged against the same aircraft for unrelated reasons is removed as well. Both
    /// deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(RemovedMaintenance))` - Record and damage deleted
    /// - `Ok(None)` - No maintenance record with that ID; nothing was deleted
    pub async fn delete_with_damage(
        &self,
        maintenance_id: i32,
    ) -> Result<Option<RemovedMaintenance>, DbErr> {
        let txn = self.db.begin().await?;

        let result = async {
            let Some(maintenance) = entity::prelude::Maintenance::find_by_id(maintenance_id)
                .one(&txn)
                .await?
            else {
                return Ok::<_, DbErr>(None);
            };

            let damage = entity::prelude::AircraftDamage::delete_many()
                .filter(
                    entity::aircraft_damage::Column::AircraftId
                        .eq(maintenance.aircraft_id.as_str()),
                )
                .exec(&txn)
                .await?;

            entity::prelude::Maintenance::delete_by_id(maintenance_id)
                .exec(&txn)
                .await?;

            Ok(Some(RemovedMaintenance {
                maintenance_id,
                aircraft_id: maintenance.aircraft_id,
                damage_removed: damage.rows_affected,
            }))
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    pub async fn max_avg_downtime(&self) -> Result<Option<MaxAvgDowntimeRow>, DbErr> {
        let backend = self.db.get_database_backend();

        MaxAvgDowntimeRow::find_by_statement(Statement::from_string(backend, MAX_AVG_DOWNTIME_SQL))
            .one(self.db)
            .await
    }
}
