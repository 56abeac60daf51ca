//! Server-side domain models and parameter types.
//!
//! Parameter types are built from request DTOs at the controller boundary; that
//! conversion is where required fields, dates and enumeration codes are validated.
//! Row types are decoded straight from the join and aggregate queries and converted to
//! tuple DTOs on the way out.

pub mod aircraft;
pub mod crew;
pub mod demo;
pub mod maintenance;
pub mod mechanic;
pub mod mission;
