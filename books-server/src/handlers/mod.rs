//! Request handlers

mod books;

pub use books::*;

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// API version reported by `/`
pub const API_VERSION: &str = "1.0";

/// Endpoint directory, serialized as a JSON object in listing order
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /books", "List all books"),
    ("GET /books/<id>", "Get a specific book"),
    ("POST /books", "Add a new book"),
    ("PUT /books/<id>", "Update a book"),
    ("DELETE /books/<id>", "Delete a book"),
    ("GET /health", "Health check"),
];

fn serialize_endpoints<S>(
    endpoints: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(endpoints.iter().copied())
}

/// Service metadata returned from `/`
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    #[serde(serialize_with = "serialize_endpoints")]
    pub endpoints: &'static [(&'static str, &'static str)],
}

/// Service metadata and endpoint directory
pub async fn home() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to the Books API",
        version: API_VERSION,
        endpoints: ENDPOINTS,
    })
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
