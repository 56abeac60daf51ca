//! Table definitions derived from the entities.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so creating the schema is idempotent.
//! There is no versioned migration history: the entities are the single source of truth.

use sea_orm::{
    sea_query::{Table, TableCreateStatement, TableDropStatement},
    ConnectionTrait, DbBackend, DbErr, EntityTrait, Schema,
};

use crate::prelude::*;

/// Builds the `CREATE TABLE IF NOT EXISTS` statement for a single entity.
pub fn create_table_statement<E: EntityTrait>(backend: DbBackend, entity: E) -> TableCreateStatement {
    Schema::new(backend)
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

/// Statements for every fleet table, parents before the tables referencing them.
pub fn fleet_table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    vec![
        create_table_statement(backend, Crew),
        create_table_statement(backend, Mission),
        create_table_statement(backend, MissionWeather),
        create_table_statement(backend, AircraftModel),
        create_table_statement(backend, AircraftArmament),
        create_table_statement(backend, Aircraft),
        create_table_statement(backend, MechanicAvailability),
        create_table_statement(backend, MechanicName),
        create_table_statement(backend, Mechanic),
        create_table_statement(backend, Maintenance),
        create_table_statement(backend, AircraftDamage),
        create_table_statement(backend, Operate),
        create_table_statement(backend, Fly),
        create_table_statement(backend, Performed),
    ]
}

/// Statement dropping the demo table if it exists.
pub fn drop_demo_table_statement() -> TableDropStatement {
    Table::drop().table(Demo).if_exists().to_owned()
}

/// Creates every fleet table plus the demo table on the given connection.
pub async fn create_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for stmt in fleet_table_statements(backend) {
        db.execute(&stmt).await?;
    }
    db.execute(&create_table_statement(backend, Demo)).await?;

    Ok(())
}
