// src/checker/outcome.rs
// =============================================================================
// This module turns a completed fetch attempt into an outcome.
//
// Every probed link ends up in exactly one of three buckets:
// - Reachable: the link answered 200
// - NotFound:  the link answered 404
// - Errored:   any other status, or the request never completed
//
// classify() is a pure function over the structured fetch result. No
// exception-style control flow crosses this boundary: the dispatcher hands
// it Result<FetchResponse, TransportError> and gets back the outcome plus
// an optional diagnostic to show the user.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::fetch::{FetchResponse, TransportError};

// The closed set of classifications a link can receive.
//
// #[derive(Serialize, Deserialize)] lets the report render these as JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Link answered with HTTP 200
    Reachable,
    /// Link answered with HTTP 404
    NotFound,
    /// Link answered with any other status, or the request failed outright
    Errored,
}

impl Outcome {
    // Short label printed next to the link in verbose mode
    pub fn short_status(&self) -> &'static str {
        match self {
            Outcome::Reachable => "ok",
            Outcome::NotFound => "not found",
            Outcome::Errored => "error",
        }
    }
}

// Classifies one completed attempt.
//
// Returns the outcome and, for errored attempts, a diagnostic message.
// Reachable and NotFound carry no diagnostic - the short status says it all.
pub fn classify(fetched: &Result<FetchResponse, TransportError>) -> (Outcome, Option<String>) {
    match fetched {
        Ok(response) => classify_status(response.status, &response.reason),
        Err(error) => (Outcome::Errored, Some(transport_diagnostic(error))),
    }
}

// Status-code side of classification.
//
// 200 and 404 are the two recognized answers; everything else (other 4xx,
// 5xx, 3xx that survived redirect following) is an error with the status
// line embedded in the diagnostic.
fn classify_status(status: u16, reason: &str) -> (Outcome, Option<String>) {
    match status {
        200 => (Outcome::Reachable, None),
        404 => (Outcome::NotFound, None),
        code => (
            Outcome::Errored,
            Some(format!("HTTP error {} - {}", code, reason)),
        ),
    }
}

// Transport side of classification: always an error, the only question is
// what to tell the user.
fn transport_diagnostic(error: &TransportError) -> String {
    match error {
        TransportError::Timeout => "Timeout".to_string(),
        TransportError::Connect => "Connection error".to_string(),
        TransportError::Other(message) => message.clone(),
    }
}
