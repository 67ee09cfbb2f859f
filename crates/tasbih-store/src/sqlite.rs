//! SQLite implementation of the Gateway trait.
//!
//! This is the primary durable backend. It uses rusqlite with bundled
//! SQLite behind a mutex; all calls are synchronous.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use tasbih_core::{CounterKey, Snapshot};

use crate::error::{GatewayError, Result};
use crate::migration;
use crate::traits::{Gateway, LoadOutcome};

/// SQLite-based gateway implementation.
///
/// Counts live in the `counters` table, one row per key; the selection is
/// a single row in the `selection` table that is deleted when cleared.
pub struct SqliteGateway {
    /// The SQLite connection, protected by a mutex.
    conn: Mutex<Connection>,
}

impl SqliteGateway {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run an operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| {
            GatewayError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                Some(format!("mutex poisoned: {}", e)),
            ))
        })?;
        f(&conn)
    }

    /// Run an operation that needs mutable access (transactions).
    fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock().map_err(|e| {
            GatewayError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                Some(format!("mutex poisoned: {}", e)),
            ))
        })?;
        f(&mut conn)
    }

    /// Read both stored halves, or `None` when nothing was ever written.
    fn read_snapshot(&self) -> Result<Option<Snapshot>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT key, count FROM counters ORDER BY key")?;
            let rows = stmt.query_map([], |row| {
                let key: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((key, count))
            })?;

            let mut counts = BTreeMap::new();
            for row in rows {
                let (key, count) = row?;
                if count < 0 {
                    return Err(GatewayError::InvalidData(format!(
                        "negative count {} for key {:?}",
                        count, key
                    )));
                }
                counts.insert(CounterKey::from(key), count as u64);
            }

            let selected: Option<String> = conn
                .query_row("SELECT key FROM selection WHERE id = 0", [], |row| {
                    row.get(0)
                })
                .optional()?;

            if counts.is_empty() && selected.is_none() {
                return Ok(None);
            }

            Ok(Some(Snapshot::new(counts, selected.map(CounterKey::from))))
        })
    }
}

impl Gateway for SqliteGateway {
    fn load(&self) -> LoadOutcome {
        match self.read_snapshot() {
            Ok(Some(snapshot)) => LoadOutcome::Snapshot(snapshot),
            Ok(None) => LoadOutcome::NotFound,
            Err(err) => LoadOutcome::Corrupt(err),
        }
    }

    fn save_counts(&self, counts: &BTreeMap<CounterKey, u64>) -> Result<()> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            // Replace the whole record: delete all, then insert current
            tx.execute("DELETE FROM counters", [])?;
            {
                let mut stmt = tx.prepare("INSERT INTO counters (key, count) VALUES (?1, ?2)")?;
                for (key, &count) in counts {
                    stmt.execute(params![key.as_str(), count as i64])?;
                }
            }

            tx.commit()?;
            Ok(())
        })
    }

    fn save_selection(&self, selected: Option<&CounterKey>) -> Result<()> {
        self.with_conn(|conn| {
            match selected {
                Some(key) => {
                    conn.execute(
                        "INSERT INTO selection (id, key) VALUES (0, ?1)
                         ON CONFLICT(id) DO UPDATE SET key = excluded.key",
                        params![key.as_str()],
                    )?;
                }
                None => {
                    conn.execute("DELETE FROM selection WHERE id = 0", [])?;
                }
            }
            Ok(())
        })
    }
}
