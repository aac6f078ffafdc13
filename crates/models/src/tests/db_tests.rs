use crate::db::connect_with_config;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;
use migration::MigratorTrait;

#[tokio::test]
async fn test_sqlite_memory_connection() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let value: i32 = row.try_get("", "test")?;
    assert_eq!(value, 1);
    Ok(())
}

/// The pool must hold a single connection, otherwise tables created by the
/// migrator would be invisible to later queries.
#[tokio::test]
async fn test_memory_pool_sees_migrated_schema() -> Result<()> {
    let mut cfg = DatabaseConfig::sqlite_memory();
    cfg.max_connections = 8;
    cfg.min_connections = 4;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;

    for _ in 0..5 {
        let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT COUNT(*) AS n FROM client".to_string());
        let row = db.query_one(stmt).await?.expect("one row");
        let n: i64 = row.try_get("", "n")?;
        assert_eq!(n, 0);
    }
    Ok(())
}
