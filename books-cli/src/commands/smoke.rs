//! End-to-end persistence check against a running server

use crate::client::ApiClient;
use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Find a book by exact title in a `GET /books` response body
fn find_by_title<'a>(list: &'a Value, title: &str) -> Option<&'a Value> {
    list.get("books")?
        .as_array()?
        .iter()
        .find(|book| book.get("title").and_then(Value::as_str) == Some(title))
}

/// Add a book, verify it is listed, delete it, and verify a second delete is rejected
pub async fn smoke(client: &ApiClient, title: Option<String>) -> Result<()> {
    let title = title.unwrap_or_else(|| format!("DB Test {}", chrono::Utc::now().timestamp()));

    println!("Adding book:");
    let added = client
        .post(
            "/books",
            &json!({"title": title, "author": "db-tester", "year": 2025}),
        )
        .await?;
    added.print();
    if added.status != StatusCode::CREATED {
        bail!("Failed to add book (status {})", added.status.as_u16());
    }

    println!("Verifying persistence:");
    let listed = client.get("/books").await?;
    listed.print();
    let id = listed
        .json()
        .and_then(|body| find_by_title(body, &title))
        .and_then(|book| book.get("id"))
        .and_then(Value::as_i64)
        .with_context(|| format!("Book '{}' not found in GET /books, persistence failed", title))?;

    println!("Found book id={}; deleting it:", id);
    let deleted = client.delete(&format!("/books/{}", id)).await?;
    deleted.print();
    if deleted.status != StatusCode::OK {
        bail!("Failed to delete book {} (status {})", id, deleted.status.as_u16());
    }

    println!("Deleting again:");
    let again = client.delete(&format!("/books/{}", id)).await?;
    again.print();
    if again.status != StatusCode::NOT_FOUND {
        bail!("Second delete of book {} returned {}", id, again.status.as_u16());
    }

    println!("Done");
    Ok(())
}
