//! Relational schema for the air-fleet operations domain.
//!
//! Aircraft, mechanics and missions are stored vertically split across several
//! fragment tables. Fragments are not linked by foreign keys; they are joined back
//! together on shared non-identity attributes:
//!
//! - `aircraft`, `aircraft_model`, `aircraft_armament` on `year_introduced` + `manufacturer`
//! - `mechanic`, `mechanic_name`, `mechanic_availability` on `contact`
//! - `mission`, `mission_weather` on `mission_location` + `mission_date`
//!
//! Two logical records sharing the same join values collide: the composite primary key of
//! the fragment rejects the second record. A fragment written with inconsistent join values
//! is unreachable from its siblings. Both are properties of the decomposition itself.

pub mod prelude;

pub mod aircraft;
pub mod aircraft_armament;
pub mod aircraft_damage;
pub mod aircraft_model;
pub mod crew;
pub mod demo;
pub mod fly;
pub mod maintenance;
pub mod mechanic;
pub mod mechanic_availability;
pub mod mechanic_name;
pub mod mission;
pub mod mission_weather;
pub mod operate;
pub mod performed;
pub mod schema;
pub mod sea_orm_active_enums;
