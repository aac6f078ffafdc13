use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{client_network, errors::ModelError};

pub const NOT_FOUND: &str = "Network not found";
pub const DUPLICATE_IPV4: &str = "Network IPv4 already exists";

/// Width of the `ipv4` column, enough for `255.255.255.255/32`.
pub const IPV4_MAX_LEN: usize = 18;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "network")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub ipv4: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ClientNetwork,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ClientNetwork => Entity::has_many(client_network::Entity).into(),
        }
    }
}

impl Related<client_network::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientNetwork.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Narrow a network id taken from a URL to the `integer` column type.
/// Values outside the column's range cannot match any row and yield `None`.
pub fn parse_id(raw: i64) -> Option<i32> {
    i32::try_from(raw).ok()
}

/// Only the column width is checked; the content is not parsed as an address.
pub fn validate_ipv4(ipv4: Option<&str>) -> Result<(), ModelError> {
    match ipv4 {
        Some(v) if v.chars().count() > IPV4_MAX_LEN => Err(ModelError::Validation(format!(
            "ipv4 must be at most {IPV4_MAX_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Insert a network; the id is assigned by the database.
pub async fn create<C: ConnectionTrait>(conn: &C, ipv4: Option<&str>) -> Result<Model, ModelError> {
    validate_ipv4(ipv4)?;
    let am = ActiveModel {
        ipv4: Set(ipv4.map(str::to_string)),
        ..Default::default()
    };
    am.insert(conn).await.map_err(|e| ModelError::from_db(e, DUPLICATE_IPV4))
}

/// Overwrite the address of an existing network; `None` clears it.
pub async fn set_ipv4<C: ConnectionTrait>(conn: &C, existing: Model, ipv4: Option<&str>) -> Result<Model, ModelError> {
    validate_ipv4(ipv4)?;
    let mut am: ActiveModel = existing.into();
    am.ipv4 = Set(ipv4.map(str::to_string));
    am.update(conn).await.map_err(|e| match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ModelError::NotFound(NOT_FOUND.into()),
        other => ModelError::from_db(other, DUPLICATE_IPV4),
    })
}
