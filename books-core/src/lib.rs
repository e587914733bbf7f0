//! Books Core Library
//!
//! This crate provides the book record types and the relational storage layer
//! used by the Books API server.

pub mod error;
pub mod storage;
pub mod types;

pub use error::{Result, StoreError};
pub use storage::{BookStore, SqliteStore};
pub use types::{Book, BookUpdate, NewBook};
