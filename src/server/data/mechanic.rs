use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryOrder, QuerySelect, Statement, TransactionTrait,
};

use crate::server::{
    data::commit_or_rollback,
    model::mechanic::{
        AssignTaskParams, CreateMechanicParams, Mechanic, MechanicRow, StatusCountRow,
        WorkingHoursRow,
    },
};

/// Mechanics with their fragments joined on `contact` and one row per logged task.
const MECHANIC_ROWS_SQL: &str = r#"
SELECT m.mechanic_id, mn.name, m.contact, ma.availability_status, p.maintenance_id
FROM mechanic m
LEFT JOIN mechanic_name mn ON mn.contact = m.contact
LEFT JOIN mechanic_availability ma ON ma.contact = m.contact
LEFT JOIN performed p ON p.mechanic_id = m.mechanic_id
ORDER BY m.mechanic_id, p.id
"#;

/// Mechanic name with the greatest total logged hours. Only mechanics whose three
/// fragments all join take part.
const MAX_WORKING_HOURS_SQL: &str = r#"
SELECT name, total_hours
FROM (
    SELECT mn.name AS name, SUM(p.working_hours) AS total_hours
    FROM mechanic m
    JOIN mechanic_availability ma ON ma.contact = m.contact
    JOIN mechanic_name mn ON mn.contact = m.contact
    JOIN performed p ON p.mechanic_id = m.mechanic_id
    GROUP BY mn.name
) mechanic_hours
ORDER BY total_hours DESC
LIMIT 1
"#;

pub struct MechanicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MechanicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the availability, name and identity fragments in one transaction.
    ///
    /// Either all three rows are persisted or none are.
    pub async fn create(&self, params: CreateMechanicParams) -> Result<Mechanic, DbErr> {
        let txn = self.db.begin().await?;

        let result = async {
            let availability = entity::mechanic_availability::ActiveModel {
                contact: ActiveValue::Set(params.contact.clone()),
                availability_status: ActiveValue::Set(params.availability_status),
            }
            .insert(&txn)
            .await?;

            let name = entity::mechanic_name::ActiveModel {
                contact: ActiveValue::Set(params.contact.clone()),
                name: ActiveValue::Set(params.name),
            }
            .insert(&txn)
            .await?;

            let identity = entity::mechanic::ActiveModel {
                mechanic_id: ActiveValue::Set(params.mechanic_id),
                contact: ActiveValue::Set(params.contact),
            }
            .insert(&txn)
            .await?;

            Ok::<_, DbErr>(Mechanic::from_fragments(identity, name, availability))
        }
        .await;

        commit_or_rollback(txn, result).await
    }

    pub async fn get_rows(&self) -> Result<Vec<MechanicRow>, DbErr> {
        let backend = self.db.get_database_backend();

        MechanicRow::find_by_statement(Statement::from_string(backend, MECHANIC_ROWS_SQL))
            .all(self.db)
            .await
    }

    /// Gets the mechanic with the most logged hours, `None` when no work has been logged.
    pub async fn get_max_working_hours(&self) -> Result<Option<WorkingHoursRow>, DbErr> {
        let backend = self.db.get_database_backend();

        WorkingHoursRow::find_by_statement(Statement::from_string(backend, MAX_WORKING_HOURS_SQL))
            .one(self.db)
            .await
    }

    /// Counts mechanics per availability status.
    pub async fn count_by_status(&self) -> Result<Vec<StatusCountRow>, DbErr> {
        entity::prelude::MechanicAvailability::find()
            .select_only()
            .column(entity::mechanic_availability::Column::AvailabilityStatus)
            .column_as(
                entity::mechanic_availability::Column::Contact.count(),
                "mechanic_count",
            )
            .group_by(entity::mechanic_availability::Column::AvailabilityStatus)
            .order_by_asc(entity::mechanic_availability::Column::AvailabilityStatus)
            .into_model::<StatusCountRow>()
            .all(self.db)
            .await
    }

    /// Logs a mechanic's hours against a maintenance record. Duplicates are kept.
    pub async fn assign_task(
        &self,
        params: AssignTaskParams,
    ) -> Result<entity::performed::Model, DbErr> {
        entity::performed::ActiveModel {
            mechanic_id: ActiveValue::Set(params.mechanic_id),
            maintenance_id: ActiveValue::Set(params.maintenance_id),
            working_hours: ActiveValue::Set(params.working_hours),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
