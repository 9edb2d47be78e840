//! `SQLite` schema bootstrap logic.
//!
//! The table definition uses `CREATE TABLE IF NOT EXISTS` — safe to re-run
//! on every startup. Produces a convergent result.

use sqlx::SqlitePool;

use crate::Result;

/// Apply the `people` table definition to the connected database.
///
/// Idempotent; safe to call before every run.
///
/// # Errors
///
/// Returns `AppError::Db` if the DDL statement fails.
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<()> {
    let ddl = r"
CREATE TABLE IF NOT EXISTS people (
    id              INTEGER PRIMARY KEY NOT NULL,
    birth_year      TEXT NOT NULL,
    eye_color       TEXT NOT NULL,
    films           TEXT NOT NULL,
    gender          TEXT NOT NULL,
    hair_color      TEXT NOT NULL,
    height          TEXT NOT NULL,
    homeworld       TEXT NOT NULL,
    mass            TEXT NOT NULL,
    name            TEXT NOT NULL,
    skin_color      TEXT NOT NULL,
    species         TEXT NOT NULL,
    starships       TEXT NOT NULL,
    vehicles        TEXT NOT NULL
);
";

    sqlx::raw_sql(ddl).execute(pool).await?;
    Ok(())
}
