//! Factory methods for creating test data.
//!
//! Each record type has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Split records (aircraft, mechanics, missions) are
//! inserted fragment by fragment with matching join values, so they read back through the
//! join queries.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let aircraft = factory::aircraft::create_aircraft(db).await?;
//! let crew = factory::crew::CrewFactory::new(db).role("Pilot").build().await?;
//! factory::helpers::create_operate(db, &aircraft.aircraft_id, crew.crew_id).await?;
//! ```

pub mod aircraft;
pub mod crew;
pub mod helpers;
pub mod maintenance;
pub mod mechanic;
pub mod mission;
