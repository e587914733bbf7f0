//! Single-request commands

use crate::client::ApiClient;
use anyhow::Result;
use serde_json::{Map, Value};

/// Build a JSON object from the fields that were given
fn book_payload(title: Option<String>, author: Option<String>, year: Option<i64>) -> Value {
    let mut payload = Map::new();
    if let Some(title) = title {
        payload.insert("title".to_string(), Value::from(title));
    }
    if let Some(author) = author {
        payload.insert("author".to_string(), Value::from(author));
    }
    if let Some(year) = year {
        payload.insert("year".to_string(), Value::from(year));
    }
    Value::Object(payload)
}

/// GET /books
pub async fn list(client: &ApiClient) -> Result<()> {
    client.get("/books").await?.print();
    Ok(())
}

/// GET /books/{id}
pub async fn get(client: &ApiClient, id: i64) -> Result<()> {
    client.get(&format!("/books/{}", id)).await?.print();
    Ok(())
}

/// POST /books. A missing year is left out of the payload.
pub async fn add(client: &ApiClient, title: String, author: String, year: Option<i64>) -> Result<()> {
    let payload = book_payload(Some(title), Some(author), year);
    client.post("/books", &payload).await?.print();
    Ok(())
}

/// PUT /books/{id} with only the given fields
pub async fn update(
    client: &ApiClient,
    id: i64,
    title: Option<String>,
    author: Option<String>,
    year: Option<i64>,
) -> Result<()> {
    let payload = book_payload(title, author, year);
    client.put(&format!("/books/{}", id), &payload).await?.print();
    Ok(())
}

/// DELETE /books/{id}
pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client.delete(&format!("/books/{}", id)).await?.print();
    Ok(())
}

/// GET /health
pub async fn health(client: &ApiClient) -> Result<()> {
    client.get("/health").await?.print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_omits_missing_fields() {
        let payload = book_payload(Some("T".into()), Some("A".into()), None);
        assert_eq!(payload, serde_json::json!({"title": "T", "author": "A"}));
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(book_payload(None, None, None), serde_json::json!({}));
    }
}
