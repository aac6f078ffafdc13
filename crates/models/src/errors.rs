use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DuplicateKey(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Classify a storage failure. A unique-constraint violation becomes
    /// `DuplicateKey(duplicate_msg)`; anything else is an opaque `Db` error.
    pub fn from_db(err: DbErr, duplicate_msg: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::DuplicateKey(duplicate_msg.to_string()),
            _ => Self::Db(err.to_string()),
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }
}
