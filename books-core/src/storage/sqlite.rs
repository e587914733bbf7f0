//! SQLite-backed book store

use super::BookStore;
use crate::error::Result;
use crate::types::{Book, BookUpdate, NewBook};
use async_trait::async_trait;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT,
    year INTEGER
)";

const SELECT_ALL: &str = "SELECT id, title, author, year FROM books ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, title, author, year FROM books WHERE id = ?1";

/// Book store over a single SQLite database file
///
/// Holds only the file path. Each operation opens a connection on a blocking
/// worker thread and the connection is closed when that operation ends.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Create a store for the database file at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open an existing database. Only `init` may create the file, so a store
    /// whose initialization failed keeps failing instead of starting empty.
    fn open(path: &Path) -> rusqlite::Result<Connection> {
        Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
    }

    /// Run `f` with a fresh connection on the blocking pool
    async fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let conn = Self::open(&path)?;
            f(&conn)
        })
        .await?
    }
}

fn select_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Book>> {
    conn.query_row(SELECT_BY_ID, [id], Book::from_row).optional()
}

#[async_trait]
impl BookStore for SqliteStore {
    async fn init(&self) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let conn = Connection::open(&path)?;
            conn.execute(CREATE_TABLE, [])?;
            tracing::debug!("books table ready at {}", path.display());
            Ok(())
        })
        .await?
    }

    async fn list(&self) -> Result<Vec<Book>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(SELECT_ALL)?;
            let rows = stmt.query_map([], Book::from_row)?;
            let mut books = Vec::new();
            for row in rows {
                books.push(row?);
            }
            Ok(books)
        })
        .await
    }

    async fn get(&self, id: i64) -> Result<Option<Book>> {
        self.with_connection(move |conn| Ok(select_by_id(conn, id)?))
            .await
    }

    async fn create(&self, book: NewBook) -> Result<Book> {
        self.with_connection(move |conn| {
            let created = conn.query_row(
                "INSERT INTO books (title, author, year) VALUES (?1, ?2, ?3) \
                 RETURNING id, title, author, year",
                params![book.title, book.author, book.year],
                Book::from_row,
            )?;
            Ok(created)
        })
        .await
    }

    async fn update(&self, id: i64, changes: BookUpdate) -> Result<Option<Book>> {
        self.with_connection(move |conn| {
            let Some(current) = select_by_id(conn, id)? else {
                return Ok(None);
            };
            if changes.is_empty() {
                return Ok(Some(current));
            }

            // NULL parameters keep the current column value
            conn.execute(
                "UPDATE books SET \
                 title = COALESCE(?1, title), \
                 author = COALESCE(?2, author), \
                 year = COALESCE(?3, year) \
                 WHERE id = ?4",
                params![changes.title, changes.author, changes.year, id],
            )?;
            Ok(select_by_id(conn, id)?)
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.with_connection(move |conn| {
            let removed = conn.execute("DELETE FROM books WHERE id = ?1", [id])?;
            Ok(removed > 0)
        })
        .await
    }
}
