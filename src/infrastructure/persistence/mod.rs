//! SQLite persistence.
//!
//! Concrete implementation of the domain repository trait using SQLx, plus pool
//! construction and the embedded schema migrations.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;

/// Schema migrations embedded at compile time from `./migrations`.
///
/// Every statement is `IF NOT EXISTS`, and applied versions are tracked in
/// `_sqlx_migrations`, so running the migrator on every start is a no-op once
/// the schema exists.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the SQLite connection pool, creating the database file if missing.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the URL is invalid or the database cannot
/// be opened.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Creates the schema if it does not exist yet.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if a migration fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
