use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{client_network, errors::ModelError};

pub const NOT_FOUND: &str = "Client not found";
pub const DUPLICATE_NAME: &str = "Client name already exists";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
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

/// Parse a client id taken from a URL. Malformed input yields `None`, which
/// callers treat exactly like an id that does not exist.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Insert a client with a freshly generated id.
pub async fn create<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
    };
    am.insert(conn).await.map_err(|e| ModelError::from_db(e, DUPLICATE_NAME))
}

/// Replace the name of an existing client.
pub async fn rename<C: ConnectionTrait>(conn: &C, existing: Model, name: &str) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.update(conn).await.map_err(|e| match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ModelError::NotFound(NOT_FOUND.into()),
        other => ModelError::from_db(other, DUPLICATE_NAME),
    })
}
