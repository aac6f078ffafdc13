use models::errors::ModelError;
use sea_orm::DatabaseTransaction;
use tracing::warn;

use crate::errors::ServiceError;

/// Close a write transaction: commit on success, roll back on failure.
/// A failed rollback is logged and the original error is returned.
pub(crate) async fn finish<T>(txn: DatabaseTransaction, outcome: Result<T, ModelError>) -> Result<T, ServiceError> {
    match outcome {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "transaction rollback failed");
            }
            Err(e.into())
        }
    }
}
