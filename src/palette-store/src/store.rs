//! SQLite-backed color repository.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{Connection, Row, params};
use tracing::{debug, info};

use crate::color::Color;
use crate::error::Result;
use crate::schema::apply_migrations;

const COLOR_SELECT_SQL: &str = "SELECT id, name, red, green, blue FROM color";

/// Repository over the `color` table.
///
/// Holds its connection behind a mutex so one store value can be shared
/// across concurrent request handlers (`rusqlite::Connection` is not
/// `Sync`). Each operation is a single, independent round-trip; there is
/// no cross-call locking or transaction beyond what SQLite provides.
pub struct ColorStore {
    conn: Mutex<Connection>,
}

impl std::fmt::Debug for ColorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorStore").finish_non_exhaustive()
    }
}

impl ColorStore {
    /// Open a database file, applying pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(db = %path.display(), "opened color database");
        Self::bootstrap(conn)
    }

    /// Open an in-memory database, applying migrations. Used by tests and
    /// the `:memory:` configuration value.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        debug!("opened in-memory color database");
        Self::bootstrap(conn)
    }

    fn bootstrap(mut conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another thread panicked mid-query;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All colors, ordered by id.
    pub fn find_all(&self) -> Result<Vec<Color>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{COLOR_SELECT_SQL} ORDER BY id;"))?;
        let mut rows = stmt.query([])?;

        let mut colors = Vec::new();
        while let Some(row) = rows.next()? {
            colors.push(parse_color_row(row)?);
        }
        Ok(colors)
    }

    /// The color with the given id, if present.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Color>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{COLOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(parse_color_row(row)?)),
            None => Ok(None),
        }
    }

    /// Whether a color with the given id exists.
    pub fn exists(&self, id: i64) -> Result<bool> {
        let conn = self.conn();
        let found = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM color WHERE id = ?1);",
            params![id],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(found)
    }

    /// Insert or overwrite a color.
    ///
    /// With `id: None` this inserts a new row and returns the color
    /// carrying the freshly assigned id. With `id: Some` it replaces the
    /// full row with that id, inserting it if vacant (upsert, not a
    /// partial patch).
    pub fn save(&self, color: &Color) -> Result<Color> {
        let conn = self.conn();
        match color.id {
            None => {
                conn.execute(
                    "INSERT INTO color (name, red, green, blue) VALUES (?1, ?2, ?3, ?4);",
                    params![color.name, color.red, color.green, color.blue],
                )?;
                let id = conn.last_insert_rowid();
                debug!(id, name = %color.name, "inserted color");
                Ok(color.clone().with_id(id))
            }
            Some(id) => {
                conn.execute(
                    "INSERT INTO color (id, name, red, green, blue)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        red = excluded.red,
                        green = excluded.green,
                        blue = excluded.blue;",
                    params![id, color.name, color.red, color.green, color.blue],
                )?;
                debug!(id, name = %color.name, "saved color");
                Ok(color.clone())
            }
        }
    }

    /// Remove the row with the given id.
    ///
    /// Removing an absent id is a no-op at this layer; callers that need
    /// to distinguish use [`exists`](Self::exists) first.
    pub fn delete(&self, id: i64) -> Result<()> {
        let changed = self.conn().execute("DELETE FROM color WHERE id = ?1;", params![id])?;
        debug!(id, changed, "deleted color");
        Ok(())
    }
}

fn parse_color_row(row: &Row<'_>) -> Result<Color> {
    Ok(Color {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        red: row.get("red")?,
        green: row.get("green")?,
        blue: row.get("blue")?,
    })
}
