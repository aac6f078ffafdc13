//! Network store: address blocks keyed by an auto-increment id with an optional unique `ipv4`.

use models::{errors::ModelError, network};
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect, TransactionTrait};
use tracing::{error, info, warn};

use crate::{errors::ServiceError, pagination::Pagination, tx};

fn log_write_failure(op: &'static str, e: &ServiceError) {
    match e {
        ServiceError::DuplicateKey(_) => warn!(op, "network ipv4 already taken"),
        ServiceError::Db(_) => error!(op, error = %e, "network write failed"),
        _ => {}
    }
}

/// Create a network. An absent `ipv4` is stored as NULL and never collides.
pub async fn create_network(db: &DatabaseConnection, ipv4: Option<&str>) -> Result<network::Model, ServiceError> {
    let txn = db.begin().await?;
    let outcome = network::create(&txn, ipv4).await;
    let created = tx::finish(txn, outcome)
        .await
        .inspect_err(|e| log_write_failure("create", e))?;
    info!(network_id = created.id, "network created");
    Ok(created)
}

pub async fn list_networks(db: &DatabaseConnection, page: Pagination) -> Result<Vec<network::Model>, ServiceError> {
    let rows = network::Entity::find()
        .offset(page.offset())
        .limit(page.row_limit())
        .all(db)
        .await?;
    Ok(rows)
}

/// Look a network up by the id from the request. Ids outside the column range are simply absent.
pub async fn get_network(db: &DatabaseConnection, raw_id: i64) -> Result<Option<network::Model>, ServiceError> {
    let Some(id) = network::parse_id(raw_id) else { return Ok(None) };
    Ok(network::Entity::find_by_id(id).one(db).await?)
}

/// Overwrite a network's `ipv4` (`None` clears it). `Ok(None)` when the network does not exist.
pub async fn update_network(db: &DatabaseConnection, raw_id: i64, ipv4: Option<&str>) -> Result<Option<network::Model>, ServiceError> {
    let Some(id) = network::parse_id(raw_id) else { return Ok(None) };
    let txn = db.begin().await?;
    let Some(existing) = network::Entity::find_by_id(id).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(None);
    };
    let outcome = network::set_ipv4(&txn, existing, ipv4).await;
    match tx::finish(txn, outcome).await {
        Ok(updated) => {
            info!(network_id = updated.id, "network updated");
            Ok(Some(updated))
        }
        Err(ServiceError::NotFound(_)) => Ok(None),
        Err(e) => {
            log_write_failure("update", &e);
            Err(e)
        }
    }
}

pub async fn delete_network(db: &DatabaseConnection, raw_id: i64) -> Result<bool, ServiceError> {
    let Some(id) = network::parse_id(raw_id) else { return Ok(false) };
    let txn = db.begin().await?;
    let outcome = network::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| ModelError::Db(e.to_string()));
    let res = tx::finish(txn, outcome)
        .await
        .inspect_err(|e| log_write_failure("delete", e))?;
    let deleted = res.rows_affected > 0;
    if deleted {
        info!(network_id = id, "network deleted");
    }
    Ok(deleted)
}
