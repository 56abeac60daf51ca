//! Air Fleet Test Utils
//!
//! Shared testing utilities for the air-fleet service: a builder for in-memory SQLite test
//! contexts and factories that insert fleet records with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for aircraft, crew, mechanics, missions and maintenance
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn removes_aircraft() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_fleet_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let aircraft = factory::aircraft::create_aircraft(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
