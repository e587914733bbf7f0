//! Storage abstraction for book records

mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::{Book, BookUpdate, NewBook};
use async_trait::async_trait;

/// Abstract book store
///
/// Every method acquires its own storage handle and releases it before
/// returning, whether the operation succeeded or not.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Ensure the backing table exists. Calling it again is a no-op.
    async fn init(&self) -> Result<()>;

    /// All books in insertion order
    async fn list(&self) -> Result<Vec<Book>>;

    /// A single book, or `None` if no row has this id
    async fn get(&self, id: i64) -> Result<Option<Book>>;

    /// Insert a book and return it with its assigned id
    async fn create(&self, book: NewBook) -> Result<Book>;

    /// Apply the present fields of `changes` to the book with this id.
    ///
    /// Returns `None` if the id does not exist. An empty update returns the
    /// current record without writing.
    async fn update(&self, id: i64, changes: BookUpdate) -> Result<Option<Book>>;

    /// Remove a book. Returns `false` if no row had this id.
    async fn delete(&self, id: i64) -> Result<bool>;
}
