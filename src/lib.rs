//! # webscan - scan a web page and report its status and hyperlinks
//!
//! webscan fetches a single page over HTTP/HTTPS, captures the outcome of
//! that fetch, and extracts the hyperlink targets present in the returned
//! markup. Broken pages are the point: an HTTP error status or an
//! unreachable host is captured as inspectable state on the scan result,
//! never raised as an error.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use webscan::scanner::Scanner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scanner = Scanner::create("https://example.com").await.unwrap();
//!
//!     if scanner.is_success_status() {
//!         for link in scanner.extract_hyperlinks() {
//!             println!("{}", link);
//!         }
//!     } else {
//!         println!("unreachable: {}", scanner.error_message().unwrap());
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`scanner`] - The core: URL validation, the shared HTTP client, the
//!   `Scanner` async factory and its accessors, and hyperlink extraction
//! - [`cli`] - Command-line definitions (clap derive)
//! - [`config`] - Resolving CLI arguments and URL files into a `ScanConfig`

pub mod cli;
pub mod config;
pub mod scanner;

// Re-export commonly used types
pub use scanner::{Scanner, TargetReference, ValidationError};
