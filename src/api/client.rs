//! Artwork catalog API client implementation.
//!
//! This module provides the client for the Art Institute of Chicago public API.
//! It issues page requests, decodes the listing response and maps HTTP failures
//! to [`ApiError`]. Requests are never retried here; retrying is a user action.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, instrument, warn};

use super::error::{ApiError, Result};
use super::types::ArtworkPage;
use crate::config::SourceSettings;

/// The artwork catalog API client.
#[derive(Debug, Clone)]
pub struct ArticClient {
    /// The HTTP client.
    client: Client,
    /// The API base URL, without a trailing slash.
    base_url: String,
}

impl ArticClient {
    /// Create a new client from the source settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(source: &SourceSettings) -> Result<Self> {
        let base_url = normalize_base_url(&source.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .build()
            .map_err(ApiError::Network)?;

        info!(base_url = %base_url, "Catalog client created");
        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the listing URL for a page.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/artworks?page={}", self.base_url, page)
    }

    /// Fetch one page of artworks.
    ///
    /// Calls `GET /artworks?page={page}`.
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, page: u32) -> Result<ArtworkPage> {
        let url = self.page_url(page);
        debug!(url = %url, "Fetching artwork page");

        let response = self.client.get(&url).send().await?;
        let result: ArtworkPage = handle_response(response).await?;

        debug!(
            records = result.data.len(),
            current_page = result.pagination.current_page,
            total_pages = result.pagination.total_pages,
            "Fetched artwork page"
        );
        Ok(result)
    }
}

/// Check the status and decode the JSON body.
async fn handle_response<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let url = response.url().to_string();

    if status.is_success() {
        let body = response.text().await?;
        serde_json::from_str::<T>(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    } else {
        let error_body = response.text().await.unwrap_or_default();
        debug!("Error response body: {}", error_body);
        Err(error_from_response(status, &url, &error_body))
    }
}

/// Create an error from an HTTP response, preferring the API's own message.
fn error_from_response(status: StatusCode, url: &str, body: &str) -> ApiError {
    // The catalog API reports failures as {"status", "error", "detail"}
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let message = json
            .get("detail")
            .and_then(|v| v.as_str())
            .or_else(|| json.get("error").and_then(|v| v.as_str()));
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            return ApiError::from_status(status, message);
        }
    }

    ApiError::from_status(status, url)
}

/// Normalize the base URL by removing trailing slashes and checking the scheme.
fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');

    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(ApiError::InvalidUrl(format!(
            "'{}' must start with http:// or https://",
            url
        )));
    }

    if !url.starts_with("https://") && !url.contains("localhost") {
        warn!("URL does not use HTTPS: {}", url);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base_url: &str) -> SourceSettings {
        SourceSettings {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_normalize_base_url_removes_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.artic.edu/api/v1/").unwrap(),
            "https://api.artic.edu/api/v1"
        );
    }

    #[test]
    fn test_normalize_base_url_handles_multiple_slashes() {
        assert_eq!(
            normalize_base_url("https://api.artic.edu/api/v1///").unwrap(),
            "https://api.artic.edu/api/v1"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_missing_scheme() {
        let err = normalize_base_url("api.artic.edu/api/v1").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_page_url() {
        let client = ArticClient::new(&source("https://api.artic.edu/api/v1/")).unwrap();
        assert_eq!(
            client.page_url(3),
            "https://api.artic.edu/api/v1/artworks?page=3"
        );
        assert_eq!(client.base_url(), "https://api.artic.edu/api/v1");
    }

    #[test]
    fn test_new_rejects_bad_url() {
        assert!(ArticClient::new(&source("ftp://example.com")).is_err());
    }

    #[test]
    fn test_error_from_response_uses_detail() {
        let body = r#"{"status":404,"error":"Not found","detail":"The page you requested does not exist"}"#;
        let err = error_from_response(StatusCode::NOT_FOUND, "http://x", body);
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "The page you requested does not exist"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_error_from_response_falls_back_to_error_field() {
        let body = r#"{"status":500,"error":"Internal error"}"#;
        let err = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, "http://x", body);
        assert!(err.to_string().contains("Internal error"));
    }

    #[test]
    fn test_error_from_response_non_json_body() {
        let err = error_from_response(StatusCode::NOT_FOUND, "http://x/artworks?page=9", "<html>");
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "http://x/artworks?page=9"),
            _ => panic!("Expected NotFound error"),
        }
    }

    /// Serve one canned HTTP response on a loopback port and return its base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_fetch_page_decodes_listing() {
        tokio_test::block_on(async {
            let base = serve_once(
                "200 OK",
                r#"{"pagination":{"total_pages":7,"current_page":2},"data":[{"id":5,"title":"Nighthawks"}]}"#,
            )
            .await;
            let client = ArticClient::new(&source(&base)).unwrap();
            let page = client.fetch_page(2).await.unwrap();
            assert_eq!(page.pagination.total_pages, 7);
            assert_eq!(page.data[0].title, "Nighthawks");
        });
    }

    #[test]
    fn test_fetch_page_non_json_body_is_invalid_response() {
        tokio_test::block_on(async {
            let base = serve_once("200 OK", "<html>maintenance</html>").await;
            let client = ArticClient::new(&source(&base)).unwrap();
            let err = client.fetch_page(1).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidResponse(_)));
        });
    }

    #[test]
    fn test_fetch_page_missing_pagination_keeps_decode_detail() {
        tokio_test::block_on(async {
            let base = serve_once("200 OK", r#"{"data":[]}"#).await;
            let client = ArticClient::new(&source(&base)).unwrap();
            match client.fetch_page(1).await {
                Err(ApiError::InvalidResponse(detail)) => assert!(detail.contains("pagination")),
                other => panic!("Expected InvalidResponse, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_fetch_page_rate_limited() {
        tokio_test::block_on(async {
            let base = serve_once("429 Too Many Requests", "{}").await;
            let client = ArticClient::new(&source(&base)).unwrap();
            let err = client.fetch_page(1).await.unwrap_err();
            assert!(matches!(err, ApiError::RateLimited));
        });
    }
}
