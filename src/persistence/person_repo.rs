//! Repository committing person batches to the `people` relation.

use sqlx::SqlitePool;

use crate::models::person::Person;
use crate::pipeline::RecordSink;
use crate::persistence::schema;
use crate::Result;

const INSERT_PERSON: &str = "
INSERT INTO people (
    id, birth_year, eye_color, films, gender, hair_color, height,
    homeworld, mass, name, skin_color, species, starships, vehicles
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// Repository wrapper around the `SQLite` pool for person records.
///
/// Inserts are plain `INSERT`s: re-running a harvest against a populated
/// table fails loudly on the primary-key constraint instead of silently
/// overwriting rows.
#[derive(Debug, Clone)]
pub struct PersonRepo {
    pool: SqlitePool,
}

impl PersonRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordSink for PersonRepo {
    async fn ensure_schema(&self) -> Result<()> {
        schema::bootstrap_schema(&self.pool).await
    }

    /// Insert one batch inside a single transaction, all-or-nothing.
    async fn commit(&self, batch: Vec<Person>) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for person in &batch {
            sqlx::query(INSERT_PERSON)
                .bind(person.id)
                .bind(&person.birth_year)
                .bind(&person.eye_color)
                .bind(&person.films)
                .bind(&person.gender)
                .bind(&person.hair_color)
                .bind(&person.height)
                .bind(&person.homeworld)
                .bind(&person.mass)
                .bind(&person.name)
                .bind(&person.skin_color)
                .bind(&person.species)
                .bind(&person.starships)
                .bind(&person.vehicles)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
