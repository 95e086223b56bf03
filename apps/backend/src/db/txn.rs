use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionError, TransactionTrait};

use crate::error::AppError;

/// Boxed future borrowed from the transaction it runs in.
pub type TxnFuture<'c, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'c>>;

/// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
///
/// The closure's error is returned as-is; begin/commit failures map through
/// the usual `DbErr` conversion.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, AppError>
where
    R: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R> + Send,
{
    db.transaction::<F, R, AppError>(f)
        .await
        .map_err(|e| match e {
            TransactionError::Connection(db_err) => AppError::from(db_err),
            TransactionError::Transaction(app_err) => app_err,
        })
}
