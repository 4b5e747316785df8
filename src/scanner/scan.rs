// src/scanner/scan.rs
// =============================================================================
// This module defines the Scanner: one validated target bound to the
// outcome of one fetch.
//
// A Scanner is built through an async factory, never a bare constructor,
// because construction performs network I/O. The factory runs in three
// steps:
//   1. Validate the input (pure, can fail fast - no network on failure)
//   2. Fetch the page (suspends while awaiting the round trip)
//   3. Assemble the Scanner (always succeeds once validation passed)
//
// After step 3 the Scanner is write-once-then-read-only: every accessor
// below is side-effect-free, and a fetch failure is state to inspect, not
// an error to catch. That keeps the error story simple: the only Err a
// caller ever sees from this module is a ValidationError.
// =============================================================================

use std::borrow::Cow;

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};
use url::Url;

use super::fetch::{self, FetchOutcome, PageResponse};
use super::links;
use super::target::{TargetReference, ValidationError};

// One scan: a validated target plus the captured fetch outcome
#[derive(Debug)]
pub struct Scanner {
    target: TargetReference,
    outcome: FetchOutcome,
}

impl Scanner {
    // Creates a Scanner from a raw URL string
    //
    // This is the only way (together with create_from_url) to obtain a
    // Scanner. Validation failures return immediately with no network
    // activity; once the input validates, construction always succeeds -
    // a dead host or a 500 response comes back as a Scanner whose
    // accessors report the failure.
    pub async fn create(input: &str) -> Result<Scanner, ValidationError> {
        let target = TargetReference::parse(input)?;
        Ok(Self::from_target(target).await)
    }

    /// Creates a Scanner from an already-parsed URL (same contract as create)
    pub async fn create_from_url(url: Url) -> Result<Scanner, ValidationError> {
        let target = TargetReference::from_url(url)?;
        Ok(Self::from_target(target).await)
    }

    // The assembly step: exactly one fetch, captured whole
    async fn from_target(target: TargetReference) -> Scanner {
        let outcome = fetch::fetch(&target).await;
        Scanner { target, outcome }
    }

    /// The validated target this Scanner fetched
    pub fn target(&self) -> &TargetReference {
        &self.target
    }

    // The completed response, if the exchange completed at all
    fn response(&self) -> Option<&PageResponse> {
        match &self.outcome {
            FetchOutcome::Completed(response) => Some(response),
            FetchOutcome::TransportFailure(_) => None,
        }
    }

    /// HTTP status code, or None when no response was completed
    pub fn status_code(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    /// Canonical reason phrase for the status ("Not Found" for 404),
    /// or None when no response was completed or the code is unknown
    pub fn reason_phrase(&self) -> Option<&'static str> {
        self.response().and_then(|r| r.status.canonical_reason())
    }

    /// HTTP protocol version of the response, or None when no response
    pub fn version(&self) -> Option<Version> {
        self.response().map(|r| r.version)
    }

    /// Response headers, or None when no response was completed
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.response().map(|r| &r.headers)
    }

    /// True iff a response was completed with a 2xx status.
    /// False covers both error statuses and transport failures.
    pub fn is_success_status(&self) -> bool {
        self.outcome.is_success()
    }

    // Human-readable description of why the scan was not a success
    //
    // None exactly when is_success_status() is true. For a completed
    // exchange this is the HTTP status line ("HTTP 404 Not Found"); for a
    // transport failure it is the underlying error's description.
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            FetchOutcome::Completed(response) if response.status.is_success() => None,
            FetchOutcome::Completed(response) => Some(format!("HTTP {}", response.status)),
            FetchOutcome::TransportFailure(e) => Some(e.to_string()),
        }
    }

    /// The captured transport error - Some only when the fetch never
    /// completed an HTTP exchange
    pub fn transport_error(&self) -> Option<&reqwest::Error> {
        match &self.outcome {
            FetchOutcome::TransportFailure(e) => Some(e),
            FetchOutcome::Completed(_) => None,
        }
    }

    /// Raw response body bytes, or None when no response was completed.
    /// The body was captured during the fetch, so repeated calls always
    /// see the same bytes.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.response().map(|r| r.body.as_slice())
    }

    // Response body decoded as text, or None when there is no body
    //
    // Decoding is lossy: invalid UTF-8 sequences become replacement
    // characters rather than failing, since scanned pages are arbitrary
    // external content. Decoding the same captured bytes on every call
    // keeps the result identical across calls.
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        self.response().map(|r| String::from_utf8_lossy(&r.body))
    }

    // Extracts every anchor href from the fetched body
    //
    // Empty when there is no body (transport failure) or the body has no
    // anchors. Works on whatever body came back, including 404 pages.
    pub fn extract_hyperlinks(&self) -> Vec<String> {
        match self.body_text() {
            Some(body) => links::extract_hyperlinks(&body),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Spins up a loopback listener that answers exactly one request with
    // the given status line and HTML body, then returns the URL to hit.
    // This keeps the tests self-contained - no internet connection needed.
    async fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Drain the request headers before answering
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_successful_scan_exposes_response_and_links() {
        let url = serve_once("200 OK", r#"<a href="/a">x</a><a href="/b">y</a>"#).await;
        let scanner = Scanner::create(&url).await.unwrap();

        assert!(scanner.is_success_status());
        assert_eq!(scanner.status_code(), Some(StatusCode::OK));
        assert_eq!(scanner.reason_phrase(), Some("OK"));
        assert_eq!(scanner.version(), Some(Version::HTTP_11));
        assert!(scanner.headers().is_some());
        // A successful scan never carries an error message
        assert_eq!(scanner.error_message(), None);
        assert_eq!(scanner.transport_error().map(|_| ()), None);
        assert_eq!(scanner.extract_hyperlinks(), vec!["/a", "/b"]);
    }

    #[tokio::test]
    async fn test_error_status_is_captured_not_raised() {
        let url = serve_once("404 Not Found", r#"<p>gone</p><a href="/home">home</a>"#).await;
        // Construction succeeds - the 404 is data, not an error
        let scanner = Scanner::create(&url).await.unwrap();

        assert!(!scanner.is_success_status());
        assert_eq!(scanner.status_code(), Some(StatusCode::NOT_FOUND));
        let message = scanner.error_message().unwrap();
        assert!(message.contains("404"));
        // The 404 body is still readable and scannable
        assert!(scanner.body_text().unwrap().contains("gone"));
        assert_eq!(scanner.extract_hyperlinks(), vec!["/home"]);
        // An error status is not a transport failure
        assert!(scanner.transport_error().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_is_captured_not_raised() {
        // Nothing listens on the discard port, so the connection is refused
        let scanner = Scanner::create("http://127.0.0.1:9/").await.unwrap();

        assert!(!scanner.is_success_status());
        assert!(scanner.status_code().is_none());
        assert!(scanner.reason_phrase().is_none());
        assert!(scanner.headers().is_none());
        assert!(scanner.body_bytes().is_none());
        assert!(scanner.body_text().is_none());
        assert!(scanner.transport_error().is_some());
        assert!(scanner.error_message().is_some());
        assert!(scanner.extract_hyperlinks().is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_captured_not_raised() {
        // .invalid is reserved (RFC 2606), so resolution can never succeed
        let scanner = Scanner::create("http://nonexistent.invalid/").await.unwrap();

        assert!(!scanner.is_success_status());
        assert!(scanner.status_code().is_none());
        assert!(scanner.body_text().is_none());
        assert!(scanner.transport_error().is_some());
        assert!(scanner.error_message().is_some());
    }

    #[tokio::test]
    async fn test_validation_failure_aborts_before_any_fetch() {
        assert!(matches!(
            Scanner::create("").await,
            Err(ValidationError::EmptyInput)
        ));
        assert!(matches!(
            Scanner::create("ftp://example.com").await,
            Err(ValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Scanner::create("::nonsense::").await,
            Err(ValidationError::MalformedUri { .. })
        ));
    }

    #[tokio::test]
    async fn test_body_text_is_idempotent() {
        let url = serve_once("200 OK", "<p>stable content</p>").await;
        let scanner = Scanner::create(&url).await.unwrap();

        let first = scanner.body_text().unwrap().into_owned();
        let second = scanner.body_text().unwrap().into_owned();
        assert_eq!(first, second);
        assert_eq!(scanner.body_bytes().unwrap(), first.as_bytes());
    }

    #[tokio::test]
    async fn test_empty_body_yields_no_links() {
        let url = serve_once("200 OK", "").await;
        let scanner = Scanner::create(&url).await.unwrap();

        assert!(scanner.is_success_status());
        assert!(scanner.extract_hyperlinks().is_empty());
    }
}
