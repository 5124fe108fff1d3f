
/// Row-level vehicle query tests
pub mod vehicle_tests;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the schema applied.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    crate::db::connect_and_migrate(&cfg).await
}
