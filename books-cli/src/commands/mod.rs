//! CLI command implementations

mod books;
mod smoke;

pub use books::{add, delete, get, health, list, update};
pub use smoke::smoke;
