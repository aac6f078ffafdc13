use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DuplicateKey(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::NotFound(msg) => Self::NotFound(msg),
            ModelError::DuplicateKey(msg) => Self::DuplicateKey(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        Self::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_kind() {
        let e: ServiceError = ModelError::DuplicateKey("Client name already exists".into()).into();
        assert!(matches!(e, ServiceError::DuplicateKey(ref m) if m == "Client name already exists"));
        assert_eq!(e.to_string(), "Client name already exists");

        let e: ServiceError = ModelError::Validation("too long".into()).into();
        assert!(matches!(e, ServiceError::Validation(_)));

        let e: ServiceError = ModelError::Db("boom".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
    }

    #[test]
    fn db_errors_are_opaque() {
        let e: ServiceError = DbErr::Custom("connection reset".into()).into();
        assert!(matches!(e, ServiceError::Db(ref m) if m.contains("connection reset")));
    }
}
