//! Database schema migrations for SQLite.
//!
//! Versioned, forward-only migrations. Applied versions are recorded in
//! `schema_migrations` so reopening an existing database is a no-op.

use rusqlite::Connection;

use crate::error::{GatewayError, Result};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Initialize or migrate the database schema. Idempotent.
pub fn migrate(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        )",
        [],
    )?;

    let applied: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if applied >= CURRENT_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for version in (applied + 1)..=CURRENT_VERSION {
        apply_version(&tx, version)?;
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)",
            rusqlite::params![version, now_millis()],
        )?;
    }
    tx.commit()?;

    Ok(())
}

fn apply_version(conn: &Connection, version: u32) -> Result<()> {
    match version {
        1 => apply_v1(conn),
        _ => Err(GatewayError::Migration(format!(
            "unknown migration version: {}",
            version
        ))),
    }
}

/// Migration v1: Initial schema.
fn apply_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- One row per counter key
        CREATE TABLE counters (
            key TEXT PRIMARY KEY,
            count INTEGER NOT NULL            -- non-negative, checked on load
        );

        -- The last-selected key: at most one row, deleted when the
        -- selection is cleared
        CREATE TABLE selection (
            id INTEGER PRIMARY KEY,
            key TEXT NOT NULL
        );
        "#,
    )?;

    Ok(())
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
