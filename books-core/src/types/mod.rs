//! Record types for the books table

mod book;
mod update;

pub use book::{Book, NewBook};
pub use update::BookUpdate;
