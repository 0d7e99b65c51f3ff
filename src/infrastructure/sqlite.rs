//! SQLite-backed tag store

use crate::domain::{File, FileId, FileTag, Tag, TagId, TagKind};
use crate::error::{FtagError, Result};
use crate::infrastructure::store::TagStore;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One open session on the tag database. The connection is closed on drop.
pub struct SqliteTagStore {
    conn: Connection,
}

impl SqliteTagStore {
    /// Open (or create) a database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init_with_connection(conn)
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_with_connection(conn)
    }

    fn init_with_connection(conn: Connection) -> Result<Self> {
        Self::init_schema(&conn)?;
        Ok(SqliteTagStore { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS tag (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS file (
                id INTEGER PRIMARY KEY,
                path BLOB NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS file_tag (
                file_id INTEGER NOT NULL REFERENCES file(id),
                tag_id INTEGER NOT NULL REFERENCES tag(id),
                kind TEXT NOT NULL CHECK (kind IN ('explicit', 'implicit')),
                PRIMARY KEY (file_id, tag_id, kind)
            );

            CREATE INDEX IF NOT EXISTS idx_file_tag_tag ON file_tag(tag_id, kind);
            ",
        )?;
        Ok(())
    }

    fn tag_from_row(row: &Row<'_>) -> rusqlite::Result<Tag> {
        Ok(Tag::new(TagId(row.get(0)?), row.get::<_, String>(1)?))
    }

    fn file_from_row(row: &Row<'_>) -> rusqlite::Result<File> {
        Ok(File {
            id: FileId(row.get(0)?),
            path: path_from_key(row.get::<_, Vec<u8>>(1)?),
        })
    }
}

/// Paths are keyed by their raw bytes so that distinct names never collide.
#[cfg(unix)]
fn path_key(path: &Path) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(path.as_os_str().as_bytes().to_vec())
}

#[cfg(not(unix))]
fn path_key(path: &Path) -> Result<Vec<u8>> {
    path.to_str()
        .map(|s| s.as_bytes().to_vec())
        .ok_or_else(|| FtagError::Config(format!("{}: path is not valid UTF-8", path.display())))
}

#[cfg(unix)]
fn path_from_key(key: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_vec(key))
}

// Keys written on these platforms are always UTF-8
#[cfg(not(unix))]
fn path_from_key(key: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&key).into_owned())
}

impl TagStore for SqliteTagStore {
    fn tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        let tag = self
            .conn
            .query_row(
                "SELECT id, name FROM tag WHERE name = ?1",
                params![name],
                Self::tag_from_row,
            )
            .optional()?;
        Ok(tag)
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM tag ORDER BY name")?;
        let tags = stmt
            .query_map([], Self::tag_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tags)
    }

    fn add_tag(&self, name: &str) -> Result<Tag> {
        self.conn
            .execute("INSERT INTO tag (name) VALUES (?1)", params![name])?;
        Ok(Tag::new(TagId(self.conn.last_insert_rowid()), name))
    }

    fn delete_tag(&self, tag_id: TagId) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM tag WHERE id = ?1", params![tag_id.0])?;
        if deleted == 0 {
            return Err(FtagError::NoSuchTag(format!("#{}", tag_id)));
        }
        Ok(())
    }

    fn file_by_path(&self, path: &Path) -> Result<Option<File>> {
        let key = path_key(path)?;
        let file = self
            .conn
            .query_row(
                "SELECT id, path FROM file WHERE path = ?1",
                params![key],
                Self::file_from_row,
            )
            .optional()?;
        Ok(file)
    }

    fn add_file(&self, path: &Path) -> Result<File> {
        let key = path_key(path)?;
        self.conn
            .execute("INSERT INTO file (path) VALUES (?1)", params![key])?;
        Ok(File {
            id: FileId(self.conn.last_insert_rowid()),
            path: path.to_path_buf(),
        })
    }

    fn file_tags_by_tag_id(&self, tag_id: TagId, kind: TagKind) -> Result<Vec<FileTag>> {
        let mut stmt = self.conn.prepare(
            "SELECT file_id, tag_id, kind FROM file_tag
             WHERE tag_id = ?1 AND kind = ?2
             ORDER BY file_id",
        )?;
        let rows = stmt
            .query_map(params![tag_id.0, kind.as_str()], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, String>(2)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(file_id, tag_id, kind)| -> Result<FileTag> {
                let kind = TagKind::from_str(&kind).map_err(FtagError::Config)?;
                Ok(FileTag::new(FileId(file_id), TagId(tag_id), kind))
            })
            .collect()
    }

    fn add_file_tag(&self, file_id: FileId, tag_id: TagId, kind: TagKind) -> Result<FileTag> {
        self.conn.execute(
            "INSERT OR IGNORE INTO file_tag (file_id, tag_id, kind) VALUES (?1, ?2, ?3)",
            params![file_id.0, tag_id.0, kind.as_str()],
        )?;
        Ok(FileTag::new(file_id, tag_id, kind))
    }

    fn remove_file_tags_by_tag_id(&self, tag_id: TagId, kind: TagKind) -> Result<()> {
        self.conn.execute(
            "DELETE FROM file_tag WHERE tag_id = ?1 AND kind = ?2",
            params![tag_id.0, kind.as_str()],
        )?;
        Ok(())
    }

    fn tags_for_file(&self, file_id: FileId, explicit_only: bool) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT t.id, t.name
             FROM tag t
             JOIN file_tag ft ON ft.tag_id = t.id
             WHERE ft.file_id = ?1 AND (?2 = 0 OR ft.kind = 'explicit')
             ORDER BY t.name",
        )?;
        let tags = stmt
            .query_map(params![file_id.0, explicit_only], Self::tag_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tags)
    }
}
