//! Thin HTTP client for the Books API

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// A response with its status and body
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Parsed JSON body, or the raw text when the body is not JSON
    pub body: Result<Value, String>,
}

impl ApiResponse {
    /// Print the status line followed by the body
    pub fn print(&self) {
        println!("Status: {}", self.status.as_u16());
        match &self.body {
            Ok(json) => match serde_json::to_string_pretty(json) {
                Ok(pretty) => println!("{}", pretty),
                Err(_) => println!("{}", json),
            },
            Err(raw) => println!("Response (raw): {}", raw),
        }
        println!();
    }

    /// The JSON body, if there is one
    pub fn json(&self) -> Option<&Value> {
        self.body.as_ref().ok()
    }
}

/// Client bound to one server
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send a request and read the whole response
    pub async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {} failed", method, url))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", url))?;
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => Ok(json),
            Err(_) => Err(text),
        };

        Ok(ApiResponse { status, body })
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_response_json_accessor() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: Ok(serde_json::json!({"count": 0})),
        };
        assert_eq!(response.json().unwrap()["count"], 0);

        let response = ApiResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Err("oops".to_string()),
        };
        assert!(response.json().is_none());
    }
}
