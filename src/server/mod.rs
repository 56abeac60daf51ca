//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Maps repository outcomes to application error kinds
//! - **Data Layer** (`data/`) - Statements, transactions and join queries
//! - **Model Layer** (`model/`) - Domain models, operation parameters and result rows
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the connection pool)
//! - **Startup** (`startup`) - Tracing, pool creation, schema creation and shutdown
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** validates the DTO into params, calls the service
//! 3. **Service** calls the repository and classifies the outcome
//! 4. **Data** runs the statements, in a transaction when several tables are written
//! 5. **Controller** converts the result to a DTO or the uniform error response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
