//! Book CRUD handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use books_core::{Book, BookUpdate, NewBook};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// List response
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<Book>,
    pub count: usize,
}

/// Create request body. Every field is optional here so that a missing
/// field is reported as such rather than as a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

impl CreateBookRequest {
    /// The complete book, or `None` if any required field is missing or null
    pub fn into_new_book(self) -> Option<NewBook> {
        Some(NewBook {
            title: self.title?,
            author: self.author?,
            year: self.year?,
        })
    }
}

/// Confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Path ids that are not integers name no book
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// Decode an optional JSON body. Empty and `null` bodies yield the default.
fn parse_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<ListBooksResponse>, ApiError> {
    tracing::info!("GET /books endpoint called");

    let books = state.store.list().await?;
    let count = books.len();

    Ok(Json(ListBooksResponse { books, count }))
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;

    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Add a new book
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let request: CreateBookRequest = parse_body(&body)?;
    let new_book = request.into_new_book().ok_or(ApiError::MissingFields)?;

    let book = state.store.create(new_book).await?;
    tracing::info!("Created book {} ({})", book.id, book.title);

    Ok((StatusCode::CREATED, Json(book)))
}

/// Update the provided fields of a book
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    let changes: BookUpdate = parse_body(&body)?;
    let write = !changes.is_empty();

    let book = state
        .store
        .update(id, changes)
        .await?
        .ok_or(ApiError::NotFound)?;

    if write {
        tracing::info!("Updated book {}", id);
    }

    Ok(Json(book))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;

    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Deleted book {}", id);

    Ok(Json(MessageResponse {
        message: "Book deleted successfully",
    }))
}
