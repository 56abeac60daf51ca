//! Request and response DTOs exchanged over the HTTP API.
//!
//! Request DTOs mirror the JSON bodies posted by the browser client, so every field is
//! optional and validated on the server. Row DTOs are tuple structs: they serialize as JSON
//! arrays, one array per flattened result row.

pub mod aircraft;
pub mod api;
pub mod crew;
pub mod demo;
pub mod maintenance;
pub mod mechanic;
pub mod mission;
