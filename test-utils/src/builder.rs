use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables, then call `build()` to create the in-memory database with those
/// tables in place.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Crew, Mission, Fly};
///
/// let test = TestBuilder::new()
///     .with_table(Crew)
///     .with_table(Mission)
///     .with_table(Fly)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(entity::schema::create_table_statement(DbBackend::Sqlite, entity));
        self
    }

    /// Adds every table the fleet endpoints touch.
    ///
    /// Tables are added in dependency order:
    /// - Crew, Mission, MissionWeather
    /// - AircraftModel, AircraftArmament, Aircraft
    /// - MechanicAvailability, MechanicName, Mechanic
    /// - Maintenance, AircraftDamage
    /// - Operate, Fly, Performed
    ///
    /// The demo table is not included; add it with `with_demo_table()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_fleet_tables()
    ///     .build()
    ///     .await?;
    /// let db = test.db.as_ref().unwrap();
    /// ```
    pub fn with_fleet_tables(mut self) -> Self {
        self.tables
            .extend(entity::schema::fleet_table_statements(DbBackend::Sqlite));
        self
    }

    /// Adds the demo scratch table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_demo_table(self) -> Self {
        self.with_table(Demo)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
