//! Runtime environment helpers
//!
//! Prepares the database a binary is about to serve from.

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Ensure the database location exists, connect, and apply migrations.
pub async fn prepare_database(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_database_dir(&cfg.url).await?;
    models::db::connect_and_migrate(cfg).await
}
