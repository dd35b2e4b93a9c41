// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed cache of pet listings.
//!
//! The [`PetStore`] is the local source of truth for listings: it is queried
//! per pet type, replaced atomically per pet type, and watched for changes.
//! Every committed replace is announced on a broadcast channel so that
//! [`PetWatch`]es re-read the rows of the type that changed.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Weak};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::pet::{Pet, PetType};

/// SQL schema for the pet cache.
pub const SCHEMA: &str = r#"
-- Cached listings, one row per pet. Ids are only unique within a type.
CREATE TABLE IF NOT EXISTS pets (
    pet_type TEXT NOT NULL,
    id INTEGER NOT NULL,
    name TEXT NOT NULL,
    pic_url TEXT NOT NULL,
    sex TEXT NOT NULL,
    breed TEXT NOT NULL,
    age TEXT NOT NULL,
    in_foster_care INTEGER NOT NULL DEFAULT 0,
    adoption_pending INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (pet_type, id)
);

-- Last successful replace per type
CREATE TABLE IF NOT EXISTS sync_markers (
    pet_type TEXT PRIMARY KEY,
    synced_at TEXT NOT NULL
);
"#;

/// Buffered change notifications per watcher before it is considered lagged.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Create the schema on a database connection if it is not there yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

fn pet_from_row(row: &rusqlite::Row<'_>) -> std::result::Result<Pet, rusqlite::Error> {
    let type_str: String = row.get(0)?;
    Ok(Pet {
        pet_type: parse_db(&type_str, "pet_type")?,
        id: row.get(1)?,
        name: row.get(2)?,
        pic_url: row.get(3)?,
        sex: row.get(4)?,
        breed: row.get(5)?,
        age: row.get(6)?,
        in_foster_care: row.get(7)?,
        adoption_pending: row.get(8)?,
    })
}

fn query_pets(conn: &Connection, pet_type: PetType) -> Result<Vec<Pet>> {
    let mut stmt = conn.prepare(
        "SELECT pet_type, id, name, pic_url, sex, breed, age, in_foster_care, adoption_pending
         FROM pets WHERE pet_type = ?1 ORDER BY id",
    )?;
    let pets = stmt
        .query_map(params![pet_type.as_str()], pet_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(pets)
}

struct StoreInner {
    conn: Mutex<Connection>,
    changes: broadcast::Sender<PetType>,
}

impl StoreInner {
    async fn pets_for(&self, pet_type: PetType) -> Result<Vec<Pet>> {
        let conn = self.conn.lock().await;
        query_pets(&conn, pet_type)
    }
}

/// Shared handle to the pet cache.
///
/// Cloning is cheap; all clones see the same connection and change feed.
#[derive(Clone)]
pub struct PetStore {
    inner: Arc<StoreInner>,
}

impl PetStore {
    /// Open a cache at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        run_migrations(&conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Open an in-memory cache (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        PetStore {
            inner: Arc::new(StoreInner {
                conn: Mutex::new(conn),
                changes,
            }),
        }
    }

    /// Get all cached pets of a type, ordered by id.
    pub async fn pets_for(&self, pet_type: PetType) -> Result<Vec<Pet>> {
        self.inner.pets_for(pet_type).await
    }

    /// Number of cached pets of a type.
    pub async fn count(&self, pet_type: PetType) -> Result<usize> {
        let conn = self.inner.conn.lock().await;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM pets WHERE pet_type = ?1",
            params![pet_type.as_str()],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// When the listing for a type was last replaced, if ever.
    pub async fn last_synced(&self, pet_type: PetType) -> Result<Option<DateTime<Utc>>> {
        let conn = self.inner.conn.lock().await;
        let synced = conn
            .query_row(
                "SELECT synced_at FROM sync_markers WHERE pet_type = ?1",
                params![pet_type.as_str()],
                |row| {
                    let value: String = row.get(0)?;
                    parse_timestamp(&value, "synced_at")
                },
            )
            .optional()?;
        Ok(synced)
    }

    /// Replace every cached pet of `pet_type` with `pets`.
    ///
    /// Runs as one transaction under the connection lock: readers see either
    /// the old listing or the new one, never a partial or empty one. Nothing
    /// is written if any pet belongs to another type.
    pub async fn replace_pets(&self, pet_type: PetType, pets: &[Pet]) -> Result<()> {
        self.replace_pets_if(pet_type, pets, || true).await.map(|_| ())
    }

    /// Like [`replace_pets`](Self::replace_pets), but only if `guard` still
    /// holds once the connection lock is taken.
    ///
    /// The guard runs with the connection locked, just before the transaction
    /// opens. Returns `Ok(false)` without writing when it refuses.
    pub async fn replace_pets_if<G>(
        &self,
        pet_type: PetType,
        pets: &[Pet],
        guard: G,
    ) -> Result<bool>
    where
        G: FnOnce() -> bool,
    {
        if let Some(stray) = pets.iter().find(|p| p.pet_type != pet_type) {
            return Err(Error::PetTypeMismatch {
                expected: pet_type.to_string(),
                found: stray.pet_type.to_string(),
                id: stray.id,
            });
        }

        {
            let mut conn = self.inner.conn.lock().await;
            if !guard() {
                tracing::debug!(pet_type = %pet_type, "replace refused by guard");
                return Ok(false);
            }
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM pets WHERE pet_type = ?1",
                params![pet_type.as_str()],
            )?;
            {
                let mut insert = tx.prepare(
                    "INSERT OR REPLACE INTO pets (pet_type, id, name, pic_url, sex, breed, age,
                     in_foster_care, adoption_pending)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                )?;
                for pet in pets {
                    insert.execute(params![
                        pet.pet_type.as_str(),
                        pet.id,
                        pet.name,
                        pet.pic_url,
                        pet.sex,
                        pet.breed,
                        pet.age,
                        pet.in_foster_care,
                        pet.adoption_pending,
                    ])?;
                }
            }
            tx.execute(
                "INSERT OR REPLACE INTO sync_markers (pet_type, synced_at) VALUES (?1, ?2)",
                params![pet_type.as_str(), Utc::now().to_rfc3339()],
            )?;
            tx.commit()?;
        }

        tracing::debug!(pet_type = %pet_type, count = pets.len(), "replaced cached pets");
        // No receivers just means nobody is watching.
        let _ = self.inner.changes.send(pet_type);
        Ok(true)
    }

    /// Watch the cached listing of a type.
    ///
    /// The first [`PetWatch::next`] yields the current rows; each later call
    /// waits for the next committed change to that type.
    pub fn watch(&self, pet_type: PetType) -> PetWatch {
        PetWatch {
            store: Arc::downgrade(&self.inner),
            changes: self.inner.changes.subscribe(),
            pet_type,
            primed: false,
        }
    }
}

/// Live query over one pet type.
///
/// Holds only a weak reference so that a forgotten watch does not keep the
/// store open.
pub struct PetWatch {
    store: Weak<StoreInner>,
    changes: broadcast::Receiver<PetType>,
    pet_type: PetType,
    primed: bool,
}

impl PetWatch {
    /// The type this watch is scoped to.
    pub fn pet_type(&self) -> PetType {
        self.pet_type
    }

    /// Wait for the next listing.
    ///
    /// Returns `Ok(None)` once the store has been dropped.
    pub async fn next(&mut self) -> Result<Option<Vec<Pet>>> {
        if self.primed {
            loop {
                match self.changes.recv().await {
                    Ok(changed) if changed == self.pet_type => break,
                    Ok(_) => continue,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(pet_type = %self.pet_type, skipped, "pet watch lagged, re-reading");
                        break;
                    }
                    Err(RecvError::Closed) => return Ok(None),
                }
            }
        }
        self.primed = true;

        let Some(store) = self.store.upgrade() else {
            return Ok(None);
        };
        store.pets_for(self.pet_type).await.map(Some)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
