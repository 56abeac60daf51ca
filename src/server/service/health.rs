use sea_orm::DatabaseConnection;

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns whether a pooled connection can reach the database.
    pub async fn is_connected(&self) -> bool {
        match self.db.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("Database ping failed: {}", err);
                false
            }
        }
    }
}
