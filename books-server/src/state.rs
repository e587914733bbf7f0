//! Application state

use books_core::{BookStore, SqliteStore};
use std::path::Path;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Book storage, injected into every handler
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    /// Create application state over an existing store
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Create application state backed by the SQLite file at `db_path`
    ///
    /// Initialization failure is logged and the state is still returned;
    /// data operations will then fail on every request.
    pub async fn open(db_path: &Path) -> Self {
        let store = SqliteStore::new(db_path);
        match store.init().await {
            Ok(()) => tracing::info!("Database ready at {}", db_path.display()),
            Err(e) => tracing::error!(
                "Failed to initialize the database at {}: {}",
                db_path.display(),
                e
            ),
        }
        Self::new(Arc::new(store))
    }
}
