//! Database repository layer for all domain entities.
//!
//! Repositories own every statement the server issues. Writes use SeaORM active models;
//! the join and aggregate reads are hand-written SQL decoded through `FromQueryResult`.
//! Writes that span several fragment tables run inside one transaction via
//! [`commit_or_rollback`].

pub mod aircraft;
pub mod crew;
pub mod damage;
pub mod demo;
pub mod maintenance;
pub mod mechanic;
pub mod mission;


use sea_orm::{DatabaseTransaction, DbErr};

/// Finishes a transaction according to the outcome of the statements run inside it.
///
/// Commits on success. On failure the transaction is rolled back explicitly; a failing
/// rollback is logged and not retried, and the caller always receives the original error.
///
/// # Arguments
/// - `txn` - The open transaction every statement was issued on
/// - `result` - Outcome of those statements
///
/// # Returns
/// - `Ok(T)` - Statements succeeded and the commit went through
/// - `Err(DbErr)` - The original statement error, or the commit error
pub(crate) async fn commit_or_rollback<T>(
    txn: DatabaseTransaction,
    result: Result<T, DbErr>,
) -> Result<T, DbErr> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Error during rollback: {}", rollback_err);
            }
            Err(err)
        }
    }
}
