//! Schema migrations for the color database.
//!
//! Migrations are registered in strictly increasing order and applied
//! atomically; the applied version is mirrored to `PRAGMA user_version`.

use rusqlite::Connection;
use tracing::info;

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

// AUTOINCREMENT keeps id assignment monotonic: ids of deleted rows are
// never handed out again.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: "CREATE TABLE color (
              id    INTEGER PRIMARY KEY AUTOINCREMENT,
              name  TEXT    NOT NULL CHECK (length(name) <= 50),
              red   INTEGER NOT NULL,
              green INTEGER NOT NULL,
              blue  INTEGER NOT NULL
          );",
}];

/// Latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Apply all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    let current = current_user_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    info!(from = current, to = latest, "applied schema migrations");
    Ok(())
}

fn current_user_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
