//! HTTP request handlers.
//!
//! Write endpoints answer `{ "success": true }`, 400 `{ "message" }` for invalid input and
//! 500 `{ "success": false }` for every other failure. Read endpoints answer the row data
//! or a plain-text 500.

pub mod aircraft;
pub mod crew;
pub mod demo;
pub mod health;
pub mod maintenance;
pub mod mechanic;
pub mod mission;

#[cfg(test)]
mod test;
