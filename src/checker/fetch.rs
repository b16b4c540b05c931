// src/checker/fetch.rs
// =============================================================================
// This module is the seam between the checking engine and the network.
//
// Key pieces:
// - Fetcher: the capability the engine calls to probe one link
// - FetchResponse / TransportError: the structured shapes a probe produces
// - HttpFetcher: the production implementation backed by reqwest
//
// The engine never touches reqwest directly. Everything it needs to know
// about a completed request fits in Result<FetchResponse, TransportError>,
// which is also what the classifier consumes. Tests swap in scripted
// fetchers and never open a socket.
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

// What came back from a link that answered at all.
//
// `reason` is the status line's reason phrase ("Not Found", "Internal
// Server Error", ...). `body` is only captured for 200 responses so a
// caller can display it; classification never reads it.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub reason: String,
    pub body: Option<String>,
}

// Why a link produced no response at all.
//
// Timeout and Connect are split out because they get fixed diagnostic
// text; everything else carries the client library's own message.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The request exceeded the per-request timeout
    Timeout,
    /// TCP/TLS connection could not be established (refused, DNS, ...)
    Connect,
    /// Any other transport-level failure, with the library's message
    Other(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "Timeout"),
            TransportError::Connect => write!(f, "Connection error"),
            TransportError::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for TransportError {}

// The HTTP capability the engine consumes: one GET per call.
//
// Implementations must not panic on bad links - every failure mode comes
// back through TransportError so the engine can fold it into the report.
pub trait Fetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, TransportError>;
}

// Production fetcher: one reqwest client shared by every request.
//
// reqwest clients hold a connection pool internally, so all concurrent
// probes reuse connections instead of handshaking per link.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the client with the per-request timeout from configuration.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();

        // Only 200 bodies are interesting to callers. A body that fails to
        // download does not change the outcome - the status already arrived.
        let body = if status == reqwest::StatusCode::OK {
            response.text().await.ok()
        } else {
            None
        };

        Ok(FetchResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

// Maps a reqwest error onto our transport taxonomy.
//
// reqwest flags timeouts and connection failures on the error itself;
// anything it doesn't flag keeps its display message.
fn categorize_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect
    } else {
        TransportError::Other(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        assert_eq!(TransportError::Timeout.to_string(), "Timeout");
        assert_eq!(TransportError::Connect.to_string(), "Connection error");
        assert_eq!(
            TransportError::Other("tls handshake failed".to_string()).to_string(),
            "tls handshake failed"
        );
    }

    #[tokio::test]
    async fn test_http_fetcher_reads_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/song")
            .with_status(200)
            .with_body("{\"name\":\"test\"}")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let response = fetcher
            .get(&format!("{}/song", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(response.reason, "OK");
        assert_eq!(response.body.as_deref(), Some("{\"name\":\"test\"}"));
    }

    #[tokio::test]
    async fn test_http_fetcher_skips_body_on_non_200() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/gone")
            .with_status(404)
            .with_body("nothing here")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let response = fetcher
            .get(&format!("{}/gone", server.url()))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.reason, "Not Found");
        assert!(response.body.is_none());
    }

    #[tokio::test]
    async fn test_http_fetcher_reports_connection_failures() {
        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();

        // Port 1 on localhost is never listening
        let result = fetcher.get("http://127.0.0.1:1/").await;

        match result {
            Err(TransportError::Connect) => {}
            other => panic!("expected a connection error, got {:?}", other),
        }
    }
}
