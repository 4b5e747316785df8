// src/scanner/fetch.rs
// =============================================================================
// This module performs the actual HTTP GET for a scan.
//
// Key functionality:
// - One shared reqwest::Client for the whole process (connection pooling)
// - A process-wide timeout knob that can be changed between fetches
// - A FetchOutcome type that captures failure instead of returning Err
//
// The important design decision lives here: an HTTP error status (404, 500)
// is NOT a failure of the fetch. The whole point of scanning is to report
// broken pages, so a completed exchange is always captured with its status,
// headers and body, and the caller inspects them. Only transport-level
// problems (DNS, connect, timeout, TLS) produce a TransportFailure - and
// even those are captured as data, never propagated as Err.
//
// Rust concepts:
// - LazyLock + RwLock: Lazily-initialized global state, safe to share
// - Enums with data: FetchOutcome carries a different payload per variant
// =============================================================================

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode, Version};
use std::sync::{LazyLock, RwLock};
use std::time::Duration;
use thiserror::Error;

use super::target::TargetReference;

/// Timeout applied to fetches until the caller configures one.
/// 100 seconds, matching the --timeout help text of the CLI.
pub const DEFAULT_TIMEOUT_SECS: u64 = 100;

// Errors from configuring the shared client
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested timeout was zero or negative
    #[error("invalid timeout {0}: must be a positive number of seconds")]
    InvalidConfiguration(i64),
}

// The shared client plus the timeout it was built with
//
// reqwest clients are immutable once built, so changing the timeout means
// building a replacement client. We keep the Duration alongside so callers
// (and tests) can ask what is currently in effect.
struct SharedClient {
    client: Client,
    timeout: Duration,
}

impl SharedClient {
    fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");
        SharedClient { client, timeout }
    }
}

// The one HTTP client shared by every fetch in this process
//
// Multiple concurrent scans may share it freely; the RwLock only guards
// the swap that happens when the timeout is reconfigured. A fetch that is
// already in flight keeps the client it started with.
static HTTP: LazyLock<RwLock<SharedClient>> = LazyLock::new(|| {
    RwLock::new(SharedClient::with_timeout(Duration::from_secs(
        DEFAULT_TIMEOUT_SECS,
    )))
});

// Sets the process-wide fetch timeout, in seconds
//
// Affects every fetch issued after this call returns. Rejects zero and
// negative values with InvalidConfiguration, leaving the previous timeout
// in effect.
pub fn set_timeout_secs(secs: i64) -> Result<(), ConfigError> {
    if secs <= 0 {
        return Err(ConfigError::InvalidConfiguration(secs));
    }

    let mut shared = HTTP.write().expect("HTTP client lock poisoned");
    *shared = SharedClient::with_timeout(Duration::from_secs(secs as u64));
    Ok(())
}

/// The timeout currently applied to new fetches
pub fn current_timeout() -> Duration {
    HTTP.read().expect("HTTP client lock poisoned").timeout
}

// Grabs a handle to the shared client
//
// Client is cheap to clone (it is an Arc around the connection pool), so
// we clone it out of the lock instead of holding the lock across I/O.
fn client() -> Client {
    HTTP.read().expect("HTTP client lock poisoned").client.clone()
}

// The outcome of one GET attempt
//
// Completed means the HTTP exchange finished, whatever the status code was.
// TransportFailure means we never got a usable response: DNS failure,
// connection refused, timeout, TLS error, or a failure while reading the
// body. The underlying reqwest::Error is kept so callers can inspect it.
#[derive(Debug)]
pub enum FetchOutcome {
    Completed(PageResponse),
    TransportFailure(reqwest::Error),
}

// A completed HTTP response, captured in full
//
// The body is read eagerly during the fetch so the response is a plain
// value afterwards: no connection is held open, and every field can be
// read any number of times.
#[derive(Debug)]
pub struct PageResponse {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl FetchOutcome {
    /// True iff the exchange completed with a 2xx status
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Completed(response) if response.status.is_success())
    }
}

// Fetches the target with a single GET using the shared client
//
// Exactly one request: no retries, and redirects are whatever reqwest's
// default policy does transparently. This function never returns an error -
// every failure mode is folded into the FetchOutcome.
pub async fn fetch(target: &TargetReference) -> FetchOutcome {
    let client = client();

    let response = match client.get(target.url().clone()).send().await {
        Ok(response) => response,
        Err(e) => return FetchOutcome::TransportFailure(e),
    };

    // Snapshot the response line and headers before consuming the body
    let status = response.status();
    let version = response.version();
    let headers = response.headers().clone();

    // The body is readable for any status code - a 404 page still has
    // content worth scanning. Reading it can itself hit a timeout or a
    // dropped connection, which counts as a transport failure.
    match response.bytes().await {
        Ok(body) => FetchOutcome::Completed(PageResponse {
            status,
            version,
            headers,
            body: body.to_vec(),
        }),
        Err(e) => FetchOutcome::TransportFailure(e),
    }
}
