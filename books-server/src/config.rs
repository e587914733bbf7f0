//! Server configuration from environment variables

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "./books_data/books.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Local development origins only
    Localhost,
    /// Any origin (`*`)
    Any,
    /// An explicit list
    List(Vec<String>),
}

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database file (`BOOKS_DB_PATH`)
    pub db_path: PathBuf,

    /// Listen address (`BOOKS_BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Directory for `app.log`; stdout only when unset (`BOOKS_LOG_DIR`)
    pub log_dir: Option<PathBuf>,

    /// `BOOKS_CORS_ORIGINS`: "*" or a comma-separated list
    pub cors_origins: CorsOrigins,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("BOOKS_DB_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let bind_addr = lookup("BOOKS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("Invalid BOOKS_BIND_ADDR: {}", bind_addr))?;

        let log_dir = lookup("BOOKS_LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let cors_origins = match lookup("BOOKS_CORS_ORIGINS") {
            Some(origins) if origins.trim() == "*" => CorsOrigins::Any,
            Some(origins) => CorsOrigins::List(
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
            None => CorsOrigins::Localhost,
        };

        Ok(Self {
            db_path: PathBuf::from(db_path),
            bind_addr,
            log_dir,
            cors_origins,
        })
    }
}
