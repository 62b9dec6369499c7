use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::{Error, Result};
use crate::repository::Catalog;

pub use rusqlite::OpenFlags;

/// Database connection.
pub struct SQLiteDatabase {
    conn: Connection,
}

impl SQLiteDatabase {
    /// Opens a new connection with flags.
    pub fn open<P: AsRef<Path>>(path: P, flags: OpenFlags) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(path, flags).map_err(|source| Error::Connect {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), "database opened");
        Ok(Self { conn })
    }

    /// Opens a new connection in read-only mode.
    pub fn open_r<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
    }

    /// Open a new connection in read/write mode.
    pub fn open_rw<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
    }

    /// Open a new connection in read/write mode. Creates the database if it does not exist.
    pub fn open_rwc<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )
    }

    /// Closes the connection.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Close(e))
    }
}

/// Quotes a table name so that it is always read as an identifier.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl Catalog for SQLiteDatabase {
    fn table_list(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT name FROM sqlite_master \
                WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
                ORDER BY name",
            )
            .map_err(Error::ListTables)?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(Error::ListTables)?;

        Ok(names)
    }

    fn table_create(&self, name: &str) -> Result<()> {
        let sql = format!(
            "CREATE TABLE {} (\
                id TEXT PRIMARY KEY,\
                doc TEXT NOT NULL\
            )",
            quote_identifier(name)
        );
        self.conn
            .execute_batch(&sql)
            .map_err(|source| Error::CreateTable {
                name: name.to_owned(),
                source,
            })?;
        debug!(table = name, "table created");
        Ok(())
    }

    // SQLite resolves table names case-insensitively for ASCII letters only.
    fn table_key(&self, name: &str) -> String {
        name.to_ascii_lowercase()
    }
}
