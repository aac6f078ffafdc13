//! Client store: identity records keyed by a generated UUID with a unique name.

use models::{client, errors::ModelError};
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect, TransactionTrait};
use tracing::{error, info, warn};

use crate::{errors::ServiceError, pagination::Pagination, tx};

fn log_write_failure(op: &'static str, e: &ServiceError) {
    match e {
        ServiceError::DuplicateKey(_) => warn!(op, "client name already taken"),
        ServiceError::Db(_) => error!(op, error = %e, "client write failed"),
        _ => {}
    }
}

/// Create a client with a server-generated id.
pub async fn create_client(db: &DatabaseConnection, name: &str) -> Result<client::Model, ServiceError> {
    let txn = db.begin().await?;
    let outcome = client::create(&txn, name).await;
    let created = tx::finish(txn, outcome)
        .await
        .inspect_err(|e| log_write_failure("create", e))?;
    info!(client_id = %created.id, "client created");
    Ok(created)
}

/// List clients in storage order.
pub async fn list_clients(db: &DatabaseConnection, page: Pagination) -> Result<Vec<client::Model>, ServiceError> {
    let rows = client::Entity::find()
        .offset(page.offset())
        .limit(page.row_limit())
        .all(db)
        .await?;
    Ok(rows)
}

/// Look a client up by the raw id from the request.
/// `None` covers both an unknown id and one that is not a valid UUID.
pub async fn get_client(db: &DatabaseConnection, raw_id: &str) -> Result<Option<client::Model>, ServiceError> {
    let Some(id) = client::parse_id(raw_id) else { return Ok(None) };
    Ok(client::Entity::find_by_id(id).one(db).await?)
}

/// Replace a client's name. `Ok(None)` when the client does not exist.
pub async fn update_client(db: &DatabaseConnection, raw_id: &str, name: &str) -> Result<Option<client::Model>, ServiceError> {
    let Some(id) = client::parse_id(raw_id) else { return Ok(None) };
    let txn = db.begin().await?;
    let Some(existing) = client::Entity::find_by_id(id).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(None);
    };
    let outcome = client::rename(&txn, existing, name).await;
    match tx::finish(txn, outcome).await {
        Ok(updated) => {
            info!(client_id = %updated.id, "client updated");
            Ok(Some(updated))
        }
        // deleted by someone else between the lookup and the update
        Err(ServiceError::NotFound(_)) => Ok(None),
        Err(e) => {
            log_write_failure("update", &e);
            Err(e)
        }
    }
}

/// Delete a client; returns whether a row was removed.
pub async fn delete_client(db: &DatabaseConnection, raw_id: &str) -> Result<bool, ServiceError> {
    let Some(id) = client::parse_id(raw_id) else { return Ok(false) };
    let txn = db.begin().await?;
    let outcome = client::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| ModelError::Db(e.to_string()));
    let res = tx::finish(txn, outcome)
        .await
        .inspect_err(|e| log_write_failure("delete", e))?;
    let deleted = res.rows_affected > 0;
    if deleted {
        info!(client_id = %id, "client deleted");
    }
    Ok(deleted)
}
