use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Unified database connector for every profile and owner.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile.clone(), owner)?;

    let mut opt = ConnectOptions::new(database_url);
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);

    if profile == DbProfile::InMemory {
        // Every SQLite in-memory connection is its own database: pin the pool
        // to one long-lived connection so the schema survives.
        opt.min_connections(1).max_connections(1);
    } else {
        opt.max_connections(10);
    }

    Database::connect(opt)
        .await
        .map_err(|e| AppError::config(format!("failed to connect to database ({profile:?}): {e}")))
}

/// Connect and bring the schema up to date.
///
/// Postgres profiles migrate with owner privileges and then reconnect with
/// the application role; the in-memory profile has a single connection and
/// migrates in place.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    if profile == DbProfile::InMemory {
        let conn = connect_db(profile, DbOwner::App).await?;
        migrate(&conn, MigrationCommand::Up).await?;
        return Ok(conn);
    }

    let owner_conn = connect_db(profile.clone(), DbOwner::Owner).await?;
    migrate(&owner_conn, MigrationCommand::Up).await?;
    owner_conn
        .close()
        .await
        .map_err(|e| AppError::db(format!("failed to close owner connection: {e}")))?;

    let conn = connect_db(profile.clone(), DbOwner::App).await?;
    info!(profile = ?profile, "database ready");
    Ok(conn)
}
