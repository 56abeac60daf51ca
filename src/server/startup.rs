use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

/// Connects to the database and creates any missing tables.
///
/// Builds a bounded connection pool from the configured sizes and acquisition timeout,
/// then issues `CREATE TABLE IF NOT EXISTS` for every entity. This function must
/// complete successfully before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool sizing
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool with the schema in place
/// - `Err(AppError)` - Failed to connect or to create the schema
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.min_connections(config.pool_min_connections)
        .max_connections(config.pool_max_connections)
        .acquire_timeout(config.pool_acquire_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    entity::schema::create_all(&db).await?;

    tracing::info!(
        min = config.pool_min_connections,
        max = config.pool_max_connections,
        "Connection pool started"
    );

    Ok(db)
}

/// Closes the connection pool.
///
/// Exits the process with status 1 when the pool cannot be closed cleanly.
pub async fn close_database(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => tracing::info!("Connection pool closed"),
        Err(err) => {
            tracing::error!("Error closing connection pool: {}", err);
            std::process::exit(1);
        }
    }
}

/// Resolves once Ctrl+C or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
