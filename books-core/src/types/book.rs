//! The Book record - one row of the `books` table

use serde::{Deserialize, Serialize};

/// A stored book, serialized flat as `{id, title, author, year}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Storage-assigned identifier, never reused
    pub id: i64,

    /// Book title
    pub title: String,

    /// Author name (nullable column)
    pub author: Option<String>,

    /// Publication year (nullable column)
    pub year: Option<i64>,
}

impl Book {
    /// Map a row selected as `id, title, author, year`
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            year: row.get(3)?,
        })
    }
}

/// The fields required to create a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl NewBook {
    /// Create a new book request with all required fields
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}
