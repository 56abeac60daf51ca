//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They turn repository
//! outcomes into [`AppError`](crate::server::error::AppError) kinds: constraint violations
//! become `Conflict` through the `DbErr` conversion, and updates or deletes that match no
//! rows become `NotFound`.

pub mod aircraft;
pub mod crew;
pub mod demo;
pub mod health;
pub mod maintenance;
pub mod mechanic;
pub mod mission;

#[cfg(test)]
mod test;
