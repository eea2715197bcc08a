//! SQLite-backed settings store.
//!
//! A single `settings(key, value)` table with upsert semantics. The
//! connection sits behind a mutex; the access pattern is a handful of reads
//! and writes per user action, so contention is a non-issue.

use std::path::Path;

use etincelle_core::SettingsStore;
use etincelle_domain::{EtincelleError, Result};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// Durable settings backend over a single SQLite file.
pub struct SqliteSettingsStore {
    conn: Mutex<Connection>,
}

impl SqliteSettingsStore {
    /// Open (or create) the settings database at `path` and ensure the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(map_sqlite_error)?;
        init_schema(&conn)?;
        debug!(path = %path.display(), "settings database opened");
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Open a private in-memory database, useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(map_sqlite_error)?;
        init_schema(&conn)?;
        Ok(Self { conn: Mutex::new(conn) })
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .lock()
            .query_row("SELECT value FROM settings WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(map_sqlite_error)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        // Upsert pattern (SQLite 3.24.0+)
        self.conn
            .lock()
            .execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(map_sqlite_error)?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        params![],
    )
    .map_err(map_sqlite_error)?;
    Ok(())
}

fn map_sqlite_error(err: rusqlite::Error) -> EtincelleError {
    EtincelleError::Storage(err.to_string())
}
