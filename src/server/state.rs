//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state handed to every handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool handle, so cloning the state shares the pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
