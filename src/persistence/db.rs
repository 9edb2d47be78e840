//! `SQLite` connection pool setup.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::{AppError, Result};

/// Connect to the database named by `database_url`, creating the file on
/// first run.
///
/// # Errors
///
/// Returns `AppError::Db` if the URL is invalid or the connection fails.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|err| AppError::Db(format!("invalid database url: {err}")))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

/// Connect to a fresh in-memory database, for tests.
///
/// The pool is capped at one connection so every handle sees the same
/// in-memory store.
///
/// # Errors
///
/// Returns `AppError::Db` if the connection fails.
pub async fn connect_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}
